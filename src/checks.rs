use std::{collections::BTreeMap, fs, path::Path};

use serde::Serialize;

use crate::{
    document::Document,
    error::{CheckError, Result},
};

/// Default location of the checks file, relative to the working directory.
pub const CHECKS_FILE_DEFAULT: &str = "checks.json";

/// The CSS selectors to look for, kept in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList(Vec<String>);

impl SelectorList {
    pub fn new(mut selectors: Vec<String>) -> Self {
        selectors.sort();
        Self(selectors)
    }

    /// Load a JSON array of selector strings from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CheckError::MissingFile(path.to_path_buf()));
        }

        let raw = fs::read(path).map_err(|source| CheckError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let selectors: Vec<String> =
            serde_json::from_slice(&raw).map_err(|source| CheckError::MalformedChecks {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::new(selectors))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Evaluate every selector against `document`.
    pub fn evaluate(&self, document: &Document) -> Result<CheckResult> {
        let mut result = BTreeMap::new();
        for selector in self.iter() {
            result.insert(selector.to_string(), document.contains(selector)?);
        }

        Ok(CheckResult(result))
    }
}

/// Presence of each selector in the checked document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CheckResult(BTreeMap<String, bool>);

impl CheckResult {
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.0.get(selector).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Render as JSON indented with four spaces.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut ser).map_err(CheckError::Render)?;

        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}
