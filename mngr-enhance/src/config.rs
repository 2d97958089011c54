//! Enhancer configuration

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::scheme::KeyScheme;

/// Where the enhancer finds the elements it works on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Data rows that open their record on double-click.
    ///
    /// Default: `c-table tbody tr`
    pub table_rows: String,

    /// Header cells that sort the table on click.
    ///
    /// Default: `c-table thead th`
    pub table_headers: String,

    /// Sidebar links, one per table.
    ///
    /// Default: `c-sidebar a`
    pub sidebar_links: String,

    /// Links in the content area (tabs).
    ///
    /// Default: `c-content a`
    pub content_links: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            table_rows: "c-table tbody tr".to_string(),
            table_headers: "c-table thead th".to_string(),
            sidebar_links: "c-sidebar a".to_string(),
            content_links: "c-content a".to_string(),
        }
    }
}

/// Class names added to marked elements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Classes {
    pub current: String,
    pub disabled: String,
    pub sorted: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            current: "current".to_string(),
            disabled: "disabled".to_string(),
            sorted: "sorted".to_string(),
        }
    }
}

/// Configuration for an [`Enhancer`](crate::Enhancer).
///
/// # Example
///
/// ```
/// use mngr_enhance::{EnhancerConfig, KeyScheme};
///
/// let config = EnhancerConfig::default()
///     .with_scheme(KeyScheme::IdentifierKeyed)
///     .with_table_rows("table.records tbody tr");
///
/// let from_toml = EnhancerConfig::from_toml_str(r#"
///     scheme = "identifier_keyed"
///
///     [selectors]
///     table_rows = "table.records tbody tr"
/// "#).unwrap();
///
/// assert_eq!(config, from_toml);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
    /// Attribute scheme of rows and sidebar links.
    ///
    /// Default: `attribute_keyed`
    pub scheme: KeyScheme,
    pub selectors: Selectors,
    pub classes: Classes,
}

impl EnhancerConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Sets the key scheme.
    pub fn with_scheme(mut self, scheme: KeyScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the data row selector.
    pub fn with_table_rows(mut self, selector: impl Into<String>) -> Self {
        self.selectors.table_rows = selector.into();
        self
    }

    /// Sets the header cell selector.
    pub fn with_table_headers(mut self, selector: impl Into<String>) -> Self {
        self.selectors.table_headers = selector.into();
        self
    }

    /// Sets the sidebar link selector.
    pub fn with_sidebar_links(mut self, selector: impl Into<String>) -> Self {
        self.selectors.sidebar_links = selector.into();
        self
    }

    /// Sets the content link selector.
    pub fn with_content_links(mut self, selector: impl Into<String>) -> Self {
        self.selectors.content_links = selector.into();
        self
    }

    /// Replaces the marker class names.
    pub fn with_classes(mut self, classes: Classes) -> Self {
        self.classes = classes;
        self
    }
}
