use std::error::Error;
use std::fmt::Display;
use std::io;
use std::path::PathBuf;

use airprobe_readings::error::ReadingsError;
use reqwest::StatusCode;

pub(crate) type Result<T> = std::result::Result<T, LoadError>;

#[derive(Debug)]
pub(crate) enum LoadError {
    Http(reqwest::Error),
    Response {
        status_code: StatusCode,
        message: String,
    },
    Io {
        path: PathBuf,
        error: io::Error,
    },
    Parse(ReadingsError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let load_error = "load error:";

        match self {
            LoadError::Http(error) => write!(f, "{load_error} HTTP request error: {error}"),
            LoadError::Response {
                status_code,
                message,
            } => write!(
                f,
                "{load_error} HTTP response error: status = {status_code}, message = {message}"
            ),
            LoadError::Io { path, error } => write!(
                f,
                "{load_error} reading `{}` failed: {error}",
                path.display()
            ),
            LoadError::Parse(error) => write!(f, "{load_error} {error}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Http(error) => Some(error),
            LoadError::Response { .. } => None,
            LoadError::Io { error, .. } => Some(error),
            LoadError::Parse(error) => Some(error),
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(error: reqwest::Error) -> Self {
        LoadError::Http(error)
    }
}

impl From<ReadingsError> for LoadError {
    fn from(error: ReadingsError) -> Self {
        LoadError::Parse(error)
    }
}
