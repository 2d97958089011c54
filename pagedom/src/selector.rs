//! CSS selectors, parsed and matched by `scraper`.

use std::fmt;

/// A selector that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SelectorError {
    message: String,
}

impl From<scraper::error::SelectorErrorKind<'_>> for SelectorError {
    fn from(err: scraper::error::SelectorErrorKind<'_>) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// A parsed selector group, keeping the text it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    text: String,
    compiled: scraper::Selector,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let compiled = scraper::Selector::parse(input)?;
        Ok(Self {
            text: input.trim().to_string(),
            compiled,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub(crate) fn compiled(&self) -> &scraper::Selector {
        &self.compiled
    }
}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
