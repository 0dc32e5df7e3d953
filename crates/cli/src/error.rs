use std::error::Error;
use std::fmt::Display;

use airprobe_vis::render::error::RenderError;

use crate::load::error::LoadError;

#[derive(Debug)]
pub(crate) enum CliError {
    Load(LoadError),
    Failed(String),
    Render(RenderError),
    Path(String),
    Worker,
}

impl From<LoadError> for CliError {
    fn from(error: LoadError) -> Self {
        CliError::Load(error)
    }
}

impl From<RenderError> for CliError {
    fn from(error: RenderError) -> Self {
        CliError::Render(error)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Load(error) => write!(f, "{cli_error} {error}"),
            CliError::Failed(message) => write!(f, "{cli_error} {message}"),
            CliError::Render(error) => write!(f, "{cli_error} {error}"),
            CliError::Path(error) => write!(f, "{cli_error} {error}"),
            CliError::Worker => write!(f, "{cli_error} the loader thread panicked"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::Load(error) => Some(error),
            CliError::Render(error) => Some(error),
            CliError::Failed(_) | CliError::Path(_) | CliError::Worker => None,
        }
    }
}
