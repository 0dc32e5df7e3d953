//! Defines the error type for rendering a page.

use std::error::Error;
use std::fmt::Display;
use std::io;

use tinytemplate::error::Error as TemplateError;

/// The error type for rendering a page.
#[derive(Debug)]
#[non_exhaustive]
pub enum RenderError {
    /// A [`std::io::Error`] encountered while writing the output.
    Io(io::Error),

    /// A [`serde_json::Error`] encountered while serializing a chart specification.
    JsonSerialization(serde_json::Error),

    /// A [`tinytemplate::error::Error`] encountered while rendering the page template.
    Template(TemplateError),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let render_error = "render error:";

        match self {
            RenderError::Io(inner) => write!(f, "{render_error} I/O error: {inner}"),
            RenderError::JsonSerialization(inner) => {
                write!(f, "{render_error} chart serialization failed: {inner}")
            }
            RenderError::Template(inner) => write!(f, "{render_error} template error: {inner}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RenderError::Io(inner) => Some(inner),
            RenderError::JsonSerialization(inner) => Some(inner),
            RenderError::Template(inner) => Some(inner),
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(error: io::Error) -> Self {
        RenderError::Io(error)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(error: serde_json::Error) -> Self {
        RenderError::JsonSerialization(error)
    }
}

impl From<TemplateError> for RenderError {
    fn from(error: TemplateError) -> Self {
        RenderError::Template(error)
    }
}
