//! Defines the configuration error type of the dashboard.

use std::error::Error;
use std::fmt::Display;

use airprobe_readings::MetricKey;

/// The result type that uses [VisError] as the error type.
pub type Result<T> = std::result::Result<T, VisError>;

/// The error type for configuring a dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisError {
    /// The text is neither an `rgb(r, g, b)` nor a `#rrggbb` color.
    InvalidColor(String),

    /// A metric was assigned to more than one panel.
    DuplicatePanel(MetricKey),
}

impl Error for VisError {}

impl Display for VisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vis_error = "vis error:";

        match self {
            VisError::InvalidColor(color) => write!(
                f,
                "{vis_error} invalid color \"{color}\"; expected `#rrggbb`, `#rgb` or `rgb(r, g, b)`"
            ),
            VisError::DuplicatePanel(metric) => {
                write!(f, "{vis_error} the `{metric}` metric is charted more than once")
            }
        }
    }
}
