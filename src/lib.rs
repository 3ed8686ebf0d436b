pub mod chart;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod series;
pub mod theme;

pub use chart::{ChartDimensions, ChartLayout, ScaledPoint, compute_layout, scale_series};
#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{ChartConfig, Config, load_config};
pub use error::ChartError;
pub use render::render_svg;
pub use series::{DataPoint, Series, load_series, parse_series};
pub use theme::Theme;

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub theme: Theme,
    pub chart: ChartConfig,
}

impl From<Config> for RenderOptions {
    fn from(config: Config) -> Self {
        Self {
            theme: config.theme,
            chart: config.chart,
        }
    }
}

pub fn render_series(series: &Series, options: &RenderOptions) -> Result<String, ChartError> {
    let layout = compute_layout(series, &options.chart)?;
    Ok(render_svg(&layout, &options.theme))
}

pub fn render_json(input: &str, options: &RenderOptions) -> Result<String, ChartError> {
    let series = parse_series(input)?;
    render_series(&series, options)
}
