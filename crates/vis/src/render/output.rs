//! Output streams for rendered pages.

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::render::OutputStream;
use crate::render::error::RenderError;

/// Writes a page to `index.html` in a directory.
pub struct OutputFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl OutputFile {
    const FILE_NAME: &str = "index.html";

    /// Creates, or truncates, `index.html` in the `dir` directory.
    pub fn new(dir: &Path) -> Result<OutputFile, RenderError> {
        let path = dir.join(Self::FILE_NAME);
        let file = File::create(&path)?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Flushes the buffered page to the file.
    pub fn finish(mut self) -> Result<PathBuf, RenderError> {
        self.writer.flush()?;
        Ok(self.path)
    }
}

impl OutputStream for OutputFile {
    fn write(&mut self, data: &str) -> Result<(), RenderError> {
        self.writer.write_all(data.as_bytes())?;
        Ok(())
    }
}

impl OutputStream for String {
    fn write(&mut self, data: &str) -> Result<(), RenderError> {
        self.push_str(data);
        Ok(())
    }
}
