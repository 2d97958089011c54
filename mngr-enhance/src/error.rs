//! Error types
//!
//! Only setup can fail: parsing the page URL, compiling configured selectors,
//! and loading configuration. Enhancement itself never errors.

use pagedom::SelectorError;

/// Errors raised while preparing an [`Enhancer`](crate::Enhancer).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A configured selector is not valid.
    #[error("Invalid selector {selector:?}: {source}")]
    Selector {
        /// The selector text from configuration.
        selector: String,
        /// Why it failed to parse.
        #[source]
        source: SelectorError,
    },

    /// The configuration file is not valid TOML for [`EnhancerConfig`](crate::EnhancerConfig).
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a selector error for the given selector text.
    pub fn selector(selector: impl Into<String>, source: SelectorError) -> Self {
        Self::Selector {
            selector: selector.into(),
            source,
        }
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
