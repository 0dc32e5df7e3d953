//! Renders a page layout as HTML.
//!
//! Charts are drawn in the browser by Plotly; every chart is written as a
//! placeholder element followed by a script that plots its specification.

pub mod error;
pub mod output;
mod page;

use crate::render::error::RenderError;

/// A sink for rendered text.
pub trait OutputStream {
    /// Appends `data` to the output.
    fn write(&mut self, data: &str) -> Result<(), RenderError>;
}

/// Something that can be written to an [`OutputStream`].
pub trait Render {
    /// Writes the rendered form of `self` to `output`.
    fn render<O>(&self, output: &mut O) -> Result<(), RenderError>
    where
        O: OutputStream;
}
