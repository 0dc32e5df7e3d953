//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::sync::Arc;

/// The result type that uses [ReadingsError] as the error type.
pub type Result<T> = std::result::Result<T, ReadingsError>;

/// The error type for reading sensor data.
///
/// Malformed cells are never reported here; they become `None` readings.
/// Only structural CSV failures and configuration mistakes are errors.
#[derive(Debug, Clone)]
pub enum ReadingsError {
    /// A [`csv::Error`] encountered while tokenizing the CSV text.
    Csv(Arc<csv::Error>),

    /// The name does not match any of the tracked metrics.
    UnknownMetric(String),
}

impl Display for ReadingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let readings_error = "readings error:";

        match self {
            ReadingsError::Csv(error) => write!(f, "{readings_error} malformed CSV: {error}"),
            ReadingsError::UnknownMetric(name) => write!(
                f,
                "{readings_error} unknown metric \"{name}\"; expected one of pm2_5, co, nh3, temperature, humidity"
            ),
        }
    }
}

impl Error for ReadingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReadingsError::Csv(error) => Some(error),
            ReadingsError::UnknownMetric(_) => None,
        }
    }
}

impl From<csv::Error> for ReadingsError {
    fn from(error: csv::Error) -> Self {
        ReadingsError::Csv(Arc::new(error))
    }
}
