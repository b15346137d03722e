//! Batch job manifests.
//!
//! A manifest is a JSON file listing conversions to run in one go:
//!
//! ```json
//! {
//!   "base_dir": "drops",
//!   "jobs": [
//!     { "input": "a.pdf", "output": "a.md" },
//!     { "input": "b.docx" }
//!   ]
//! }
//! ```

use crate::error::{Error, Result};
use crate::output::default_output_path;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One entry of a manifest, as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Source document
    pub input: PathBuf,

    /// Destination file; defaults to the input with an `.md` extension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

/// A conversion job with both paths resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Source document
    pub input: PathBuf,
    /// Destination file
    pub output: PathBuf,
}

/// A parsed batch manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Directory relative job paths are resolved against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,

    /// Jobs in execution order
    pub jobs: Vec<JobSpec>,

    /// Directory the manifest was read from
    #[serde(skip)]
    origin_dir: PathBuf,
}

impl Manifest {
    /// Read and validate a manifest file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingInput(path.to_path_buf()));
        }
        let json = fs::read_to_string(path)?;
        let origin = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_json(&json, origin)
    }

    /// Parse a manifest from JSON text. Relative paths resolve against `origin_dir`.
    ///
    /// Text that does not match the manifest schema fails with
    /// [`Error::ManifestSyntax`]; a manifest without usable jobs fails with
    /// [`Error::InvalidManifest`].
    pub fn from_json(json: &str, origin_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut manifest: Manifest = serde_json::from_str(json)?;
        if manifest.jobs.is_empty() {
            return Err(Error::InvalidManifest("manifest lists no jobs".to_string()));
        }
        if let Some(index) = manifest
            .jobs
            .iter()
            .position(|j| j.input.as_os_str().is_empty())
        {
            return Err(Error::InvalidManifest(format!(
                "job {} has an empty input path",
                index + 1
            )));
        }
        manifest.origin_dir = origin_dir.into();
        Ok(manifest)
    }

    /// The directory job paths are resolved against.
    pub fn base_dir(&self) -> PathBuf {
        match &self.base_dir {
            Some(base) => self.origin_dir.join(base),
            None => self.origin_dir.clone(),
        }
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the manifest has no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Jobs with absolute-or-base-relative paths and defaulted outputs.
    pub fn resolved_jobs(&self) -> Vec<Job> {
        let base = self.base_dir();
        self.jobs
            .iter()
            .map(|spec| {
                let input = base.join(&spec.input);
                let output = match &spec.output {
                    Some(out) => base.join(out),
                    None => default_output_path(&input),
                };
                Job { input, output }
            })
            .collect()
    }
}
