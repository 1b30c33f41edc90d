//! Check HTML documents for the presence of CSS selectors, and serve a static page.

pub mod checker;
pub mod checks;
pub mod cli;
pub mod document;
pub mod downloader;
pub mod error;
pub mod server;

pub use checker::{Checker, Source};
pub use checks::{CheckResult, SelectorList};
pub use error::{CheckError, Result};
