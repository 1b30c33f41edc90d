use scraper::{Html, Selector};

use crate::error::{CheckError, Result};

/// Parsed HTML document that can be queried with CSS selectors.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse `html` into a queryable document.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Parse raw bytes. Invalid UTF-8 sequences are replaced rather than rejected.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(bytes))
    }

    /// Returns `true` if at least one element matches `selector`.
    pub fn contains(&self, selector: &str) -> Result<bool> {
        let parsed = Selector::parse(selector).map_err(|e| CheckError::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("{:?}", e.kind),
        })?;

        Ok(self.html.select(&parsed).next().is_some())
    }
}
