//! The page URL and its query string.
//!
//! The query string is the only state the enhancer shares with the server,
//! so it is modeled as an immutable value: parsed once from the location and
//! rebuilt, never mutated, when a handler needs the next URL.

use std::fmt;

use url::Url;
use url::form_urlencoded;

use crate::error::Result;

/// Ordered query-string parameters with `application/x-www-form-urlencoded`
/// parsing and serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string, with or without its leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    /// Returns the first value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns a copy with `key` set to `value`.
    ///
    /// The first existing pair for `key` keeps its position and takes the new
    /// value, later duplicates are dropped, and a missing key is appended.
    pub fn with(&self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut pairs = Vec::with_capacity(self.pairs.len() + 1);
        let mut replaced = false;

        for (k, v) in &self.pairs {
            if k == key {
                if !replaced {
                    pairs.push((k.clone(), value.clone()));
                    replaced = true;
                }
            } else {
                pairs.push((k.clone(), v.clone()));
            }
        }

        if !replaced {
            pairs.push((key.to_string(), value));
        }

        Self { pairs }
    }

    /// Serializes to a query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// The URL of the page being enhanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

impl Location {
    /// Parses an absolute URL.
    pub fn parse(href: &str) -> Result<Self> {
        Ok(Self {
            url: Url::parse(href)?,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// The percent-encoded path, like `location.pathname`.
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Parses the current query string.
    pub fn params(&self) -> QueryParams {
        QueryParams::parse(self.url.query().unwrap_or_default())
    }

    /// The URL reached by replacing only the query string with `params`.
    pub fn with_params(&self, params: &QueryParams) -> Url {
        let mut url = self.url.clone();
        url.set_query(Some(&params.to_query_string()));
        url
    }

    /// Resolves `href` against this location.
    pub fn join(&self, href: &str) -> Result<Url> {
        Ok(self.url.join(href)?)
    }
}

impl From<Url> for Location {
    fn from(url: Url) -> Self {
        Self { url }
    }
}

impl std::str::FromStr for Location {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.href())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decodes_form_encoding() {
        let params = QueryParams::parse("?sort_column=first+name&q=a%26b");
        assert_eq!(params.get("sort_column"), Some("first name"));
        assert_eq!(params.get("q"), Some("a&b"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_get_returns_first_duplicate() {
        let params = QueryParams::parse("a=1&a=2");
        assert_eq!(params.get("a"), Some("1"));
    }

    #[test]
    fn test_with_replaces_in_place_and_drops_duplicates() {
        let params = QueryParams::parse("a=1&page=2&a=3");
        let next = params.with("a", "x");
        assert_eq!(next.to_query_string(), "a=x&page=2");
        // The receiver is untouched.
        assert_eq!(params.to_query_string(), "a=1&page=2&a=3");
    }

    #[test]
    fn test_with_appends_missing_key() {
        let next = QueryParams::parse("page=2").with("sort_column", "name");
        assert_eq!(next.to_query_string(), "page=2&sort_column=name");
    }

    #[test]
    fn test_serialization_uses_form_encoding() {
        let params: QueryParams = [("sort_column", "first name")].into_iter().collect();
        assert_eq!(params.to_string(), "sort_column=first+name");
    }

    #[test]
    fn test_with_params_keeps_path_and_fragment() {
        let location = Location::parse("http://localhost/tables/1/records?page=2#top").unwrap();
        let url = location.with_params(&location.params().with("sort_column", "id"));
        assert_eq!(
            url.as_str(),
            "http://localhost/tables/1/records?page=2&sort_column=id#top"
        );
    }

    #[test]
    fn test_relative_url_is_rejected() {
        assert!(Location::parse("/tables/1/records").is_err());
    }
}
