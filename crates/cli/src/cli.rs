use std::env;
use std::path::PathBuf;

use airprobe_readings::MetricKey;
use airprobe_vis::color::Color;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use tracing::Level;

use crate::error::CliError;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Specify the log level. The `RUST_LOG` environment variable takes
    /// precedence when it is set.
    #[arg(short, long, global = true, default_value_t = Level::INFO)]
    pub(crate) log_level: Level,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Load the sensor readings and generate a dashboard of charts.
    View(ViewArgs),
}

#[derive(Args)]
pub(crate) struct ViewArgs {
    /// Specify where to load the CSV readings from.
    ///
    /// The value is either a file path or an `http://` or `https://` URL.
    #[arg(short, long)]
    pub(crate) source: String,

    /// Specify the directory where the `index.html` dashboard is written.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,

    /// Specify that the first row holds readings instead of column names.
    ///
    /// Columns are then read in the order: pm2_5, co, nh3, temperature, humidity.
    #[arg(long)]
    pub(crate) no_header: bool,

    /// Specify the dashboard title.
    #[arg(short, long)]
    pub(crate) title: Option<String>,

    /// Override the color of a metric, e.g. `co=#ffce56` or `co=rgb(255, 206, 86)`.
    ///
    /// Colors are written as `#rrggbb`, `#rgb` or `rgb(r, g, b)`; named
    /// colors, `rgba()` and `hsl()` are not accepted.
    #[arg(short, long = "color", value_name = "METRIC=COLOR", value_parser(parse_color_override))]
    pub(crate) colors: Vec<ColorOverride>,

    /// Specify the HTTP timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub(crate) timeout: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ColorOverride {
    pub(crate) metric: MetricKey,
    pub(crate) color: Color,
}

fn parse_color_override(value: &str) -> Result<ColorOverride, String> {
    let Some((metric, color)) = value.split_once('=') else {
        return Err(format!(
            "The `{value}` color must be written as METRIC=COLOR."
        ));
    };

    let metric = metric.parse::<MetricKey>().map_err(|e| e.to_string())?;
    let color = color.parse::<Color>().map_err(|e| e.to_string())?;

    Ok(ColorOverride { metric, color })
}

fn parse_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}
