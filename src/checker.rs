use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{info, warn};
use url::Url;

use crate::{
    checks::{CheckResult, SelectorList},
    document::Document,
    downloader::Downloader,
    error::{CheckError, Result},
};

/// Where the HTML to check comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(Url),
}

/// Runs a list of selector checks against a local file or a downloaded page.
#[derive(Debug, Clone)]
pub struct Checker {
    downloader: Downloader,
    // Downloaded pages are staged here while they are checked.
    scratch_dir: PathBuf,
}

impl Checker {
    /// Create a checker that stages downloads in the working directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            downloader: Downloader::new()?,
            scratch_dir: PathBuf::from("."),
        })
    }

    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    pub async fn check(&self, source: &Source, checks: &Path) -> Result<CheckResult> {
        match source {
            Source::File(path) => {
                info!("Checking file: {}", path.display());
                self.check_file(path, checks)
            }
            Source::Url(url) => {
                info!("Checking URL: {}", url);
                self.check_url(url, checks).await
            }
        }
    }

    /// Check the HTML file at `path` against the selectors in `checks`.
    pub fn check_file(&self, path: &Path, checks: &Path) -> Result<CheckResult> {
        if !path.exists() {
            return Err(CheckError::MissingFile(path.to_path_buf()));
        }

        let bytes = fs::read(path).map_err(|source| CheckError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Document::from_bytes(&bytes);

        SelectorList::load(checks)?.evaluate(&document)
    }

    /// Download `url` into a temporary file and check it. The temporary file is
    /// removed on every path out of this function.
    pub async fn check_url(&self, url: &Url, checks: &Path) -> Result<CheckResult> {
        let body = self.downloader.download(url).await?;

        let mut staged = tempfile::Builder::new()
            .prefix("url")
            .suffix(".html")
            .tempfile_in(&self.scratch_dir)
            .map_err(CheckError::TempFile)?;
        staged.write_all(&body).map_err(CheckError::TempFile)?;
        staged.flush().map_err(CheckError::TempFile)?;
        info!("File {} saved!", staged.path().display());

        let result = self.check_file(staged.path(), checks);

        let staged_path = staged.path().to_path_buf();
        if let Err(e) = staged.close() {
            warn!("Failed to remove {}: {}", staged_path.display(), e);
        }

        result
    }
}
