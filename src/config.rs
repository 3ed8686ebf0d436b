use crate::chart::ChartDimensions;
use crate::theme::Theme;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_TITLE: &str = "Synthetic trading performance (weekends skipped)";

#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub dimensions: ChartDimensions,
    pub title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            dimensions: ChartDimensions::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub chart: ChartConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    padding: Option<f32>,
    title: Option<String>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed: ConfigFile = serde_json::from_str(&contents)
        .with_context(|| format!("malformed config file {}", path.display()))?;
    apply_config_file(&mut config.chart, parsed);
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

fn apply_config_file(chart: &mut ChartConfig, parsed: ConfigFile) {
    if let Some(v) = parsed.width {
        chart.dimensions.width = v;
    }
    if let Some(v) = parsed.height {
        chart.dimensions.height = v;
    }
    if let Some(v) = parsed.padding {
        chart.dimensions.padding = v;
    }
    if let Some(v) = parsed.title {
        chart.title = v;
    }
}
