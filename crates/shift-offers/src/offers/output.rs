use std::io;
use std::path::{Path, PathBuf};

pub const PAY_RATE_CHART: &str = "pay_rate_distribution.png";
pub const SLOT_COUNTS_CHART: &str = "slot_counts.png";
pub const MONTHLY_OFFERS_CHART: &str = "offers_per_month.png";
pub const SUMMARY_REPORT: &str = "summary.md";

/// Directory that receives the report artifacts.
///
/// [`OutputDirectory::ensure`] creates the directory (and any parents) when
/// it is absent. [`OutputDirectory::existing`] wraps a path without touching
/// the filesystem; writers then fail if the directory is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDirectory {
    path: PathBuf,
}

impl OutputDirectory {
    pub fn ensure<P: Into<PathBuf>>(path: P) -> io::Result<Self> {
        let path = path.into();
        std::fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    pub fn existing<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn artifact(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }
}
