use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed series payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("series has no points")]
    EmptySeries,

    #[error("a {width}x{height} chart with padding {padding} leaves no drawable area")]
    InvalidDimensions { width: f32, height: f32, padding: f32 },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to rasterize chart: {0}")]
    Raster(String),
}
