use crate::chart::compute_layout;
use crate::config::{Config, load_config};
use crate::render::{render_svg, write_output_svg};
use crate::series::load_series;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_INPUT: &str = "scripts/output/synthetic_trading_data.json";
pub const DEFAULT_OUTPUT: &str = "scripts/output/synthetic_chart.svg";

#[derive(Parser, Debug)]
#[command(name = "chartsvg", version, about = "Render a JSON time series as an SVG line chart")]
pub struct Args {
    /// Input JSON file with a `points` array
    #[arg(short = 'i', long = "input", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output file (svg/png). Defaults to scripts/output/synthetic_chart.<ext>
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (width, height, padding, title)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Canvas width
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Canvas height
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,

    /// Padding on every side of the plot
    #[arg(short = 'p', long = "padding")]
    pub padding: Option<f32>,

    /// Chart title
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing();
    let saved = execute(&args)?;
    println!("Saved chart to {}", saved.display());
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Loads, lays out, renders and writes the chart. Returns the absolute output path.
pub fn execute(args: &Args) -> Result<PathBuf> {
    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, args);

    let series = load_series(&args.input)?;
    let layout = compute_layout(&series, &config.chart)?;
    let svg = render_svg(&layout, &config.theme);

    let output = resolve_output(args.output.as_deref(), args.output_format);
    match args.output_format {
        OutputFormat::Svg => write_output_svg(&svg, &output)?,
        OutputFormat::Png => write_png(&svg, &output, &config)?,
    }

    Ok(std::fs::canonicalize(&output).unwrap_or(output))
}

#[cfg(feature = "png")]
fn write_png(svg: &str, output: &Path, config: &Config) -> Result<()> {
    crate::render::write_output_png(svg, output, &config.theme)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
fn write_png(_svg: &str, _output: &Path, _config: &Config) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

fn apply_overrides(config: &mut Config, args: &Args) {
    let dims = &mut config.chart.dimensions;
    if let Some(width) = args.width {
        dims.width = width;
    }
    if let Some(height) = args.height {
        dims.height = height;
    }
    if let Some(padding) = args.padding {
        dims.padding = padding;
    }
    if let Some(title) = &args.title {
        config.chart.title = title.clone();
    }
}

fn resolve_output(output: Option<&Path>, format: OutputFormat) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => Path::new(DEFAULT_OUTPUT).with_extension(format.extension()),
    }
}
