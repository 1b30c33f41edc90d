use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use url::Url;

use crate::{checker::Source, checks::CHECKS_FILE_DEFAULT};

/// Check an HTML file or page for the presence of CSS selectors.
#[derive(Parser, Debug)]
#[command(name = "html-checker", version)]
pub struct Args {
    /// Path to checks.json
    #[arg(short, long, env = "CHECKS_FILE", default_value = CHECKS_FILE_DEFAULT)]
    pub checks: PathBuf,

    /// Path to index.html
    #[arg(short, long, default_value = "")]
    pub file: String,

    /// URL to check
    #[arg(short, long, default_value = "")]
    pub url: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("Either --url or --file parameter should be specified.")]
    MissingSource,
    #[error("Only one of --url or --file may be specified.")]
    ConflictingSources,
    #[error("URL check error: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Args {
    /// Resolve `--file`/`--url` into the document source. Exactly one must be set.
    pub fn source(&self) -> Result<Source, UsageError> {
        match (self.file.is_empty(), self.url.is_empty()) {
            (true, true) => Err(UsageError::MissingSource),
            (false, false) => Err(UsageError::ConflictingSources),
            (false, true) => Ok(Source::File(PathBuf::from(&self.file))),
            (true, false) => Ok(Source::Url(Url::parse(&self.url)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::{Args, UsageError};
    use crate::checker::Source;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["html-checker", "--file", "index.html"]).unwrap();

        // CHECKS_FILE may be set in the environment running the tests.
        if std::env::var_os("CHECKS_FILE").is_none() {
            assert_eq!(args.checks, PathBuf::from("checks.json"));
        }
        assert_eq!(args.source(), Ok(Source::File(PathBuf::from("index.html"))));
    }

    #[test]
    fn test_url_source() {
        let args = Args::try_parse_from([
            "html-checker",
            "-c",
            "my-checks.json",
            "-u",
            "https://example.com/page",
        ])
        .unwrap();

        assert_eq!(args.checks, PathBuf::from("my-checks.json"));
        match args.source() {
            Ok(Source::Url(url)) => assert_eq!(url.as_str(), "https://example.com/page"),
            other => panic!("unexpected source: {:?}", other),
        }
    }

    #[test]
    fn test_missing_source() {
        let args = Args::try_parse_from(["html-checker"]).unwrap();
        assert_eq!(args.source(), Err(UsageError::MissingSource));

        let args = Args::try_parse_from(["html-checker", "--file", "", "--url", ""]).unwrap();
        assert_eq!(args.source(), Err(UsageError::MissingSource));
    }

    #[test]
    fn test_conflicting_sources() {
        let args = Args::try_parse_from([
            "html-checker",
            "--file",
            "index.html",
            "--url",
            "https://example.com",
        ])
        .unwrap();

        assert_eq!(args.source(), Err(UsageError::ConflictingSources));
    }

    #[test]
    fn test_invalid_url() {
        let args = Args::try_parse_from(["html-checker", "--url", "not a url"]).unwrap();
        assert!(matches!(args.source(), Err(UsageError::InvalidUrl(_))));
    }
}
