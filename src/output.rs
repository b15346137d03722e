//! Output destinations for converted text.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Where converted content goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Create or overwrite a UTF-8 file
    File(PathBuf),
    /// Print to standard output
    Stdout,
}

impl OutputTarget {
    /// Target a file path.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        OutputTarget::File(path.into())
    }

    /// Write the whole content in one go.
    ///
    /// Files are truncated first; there is no temporary file or rename, so an
    /// interrupted write leaves a partial file behind.
    pub fn write(&self, content: &str) -> Result<()> {
        match self {
            OutputTarget::File(path) => {
                std::fs::write(path, content)?;
                log::debug!("Wrote {} bytes to {}", content.len(), path.display());
            }
            OutputTarget::Stdout => {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{}", content)?;
                out.flush()?;
            }
        }
        Ok(())
    }

    /// File path, if this target is a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            OutputTarget::File(path) => Some(path),
            OutputTarget::Stdout => None,
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::File(path) => write!(f, "{}", path.display()),
            OutputTarget::Stdout => f.write_str("<stdout>"),
        }
    }
}

/// Default output path for an input: same location, `.md` extension.
pub fn default_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    input.as_ref().with_extension("md")
}
