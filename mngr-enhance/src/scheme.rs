//! How rows and sidebar links identify the table and record they belong to.
//!
//! Markup comes in two flavours: rows keyed by `data-schema`, `data-table`
//! and `data-record`, or rows keyed by a numeric `data-table-oid` and a
//! `data-record-id`. Which one a page uses is fixed in configuration.

use std::fmt;
use std::sync::LazyLock;

use pagedom::Element;
use regex::Regex;
use serde::Deserialize;

use crate::routes;

pub const DATA_SCHEMA: &str = "data-schema";
pub const DATA_TABLE: &str = "data-table";
pub const DATA_RECORD: &str = "data-record";
pub const DATA_TABLE_OID: &str = "data-table-oid";
pub const DATA_RECORD_ID: &str = "data-record-id";
/// Names a header cell's column.
pub const DATA_COLUMN: &str = "data-column";

static NAMED_TABLE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/tables/([^/]+)/([^/]+)").expect("valid regex"));

static OID_TABLE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/tables/(\d+)(?:/|$)").expect("valid regex"));

/// Attribute scheme used by the rendered markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyScheme {
    /// `data-schema` + `data-table` (+ `data-record` on rows).
    #[default]
    AttributeKeyed,
    /// `data-table-oid` (+ `data-record-id` on rows).
    IdentifierKeyed,
}

/// A table, as addressed by URLs and markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableRef {
    Named { schema: String, table: String },
    Oid(u32),
}

impl TableRef {
    pub fn named(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self::Named {
            schema: schema.into(),
            table: table.into(),
        }
    }

    /// Whether a sidebar link points at this table.
    pub fn matches_link(&self, link: &Element) -> bool {
        match self {
            Self::Named { schema, table } => {
                link.get_attribute(DATA_SCHEMA) == Some(schema.as_str())
                    && link.get_attribute(DATA_TABLE) == Some(table.as_str())
            }
            Self::Oid(oid) => {
                link.get_attribute(DATA_TABLE_OID)
                    .and_then(|v| v.parse::<u32>().ok())
                    == Some(*oid)
            }
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { schema, table } => write!(f, "{schema}.{table}"),
            Self::Oid(oid) => write!(f, "{oid}"),
        }
    }
}

/// Identity of a single record row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey {
    pub table: TableRef,
    pub record: String,
}

impl RowKey {
    /// Path of the record's edit page.
    pub fn edit_path(&self) -> String {
        routes::edit_record(&self.table, &self.record)
    }
}

impl KeyScheme {
    /// Extracts the table a page path belongs to.
    ///
    /// Returns `None` for paths outside `/tables/...`. Captured segments are
    /// percent-decoded before use.
    pub fn table_from_path(self, path: &str) -> Option<TableRef> {
        match self {
            Self::AttributeKeyed => {
                let caps = NAMED_TABLE_PATH.captures(path)?;
                Some(TableRef::Named {
                    schema: decode_segment(&caps[1])?,
                    table: decode_segment(&caps[2])?,
                })
            }
            Self::IdentifierKeyed => {
                let caps = OID_TABLE_PATH.captures(path)?;
                caps[1].parse().ok().map(TableRef::Oid)
            }
        }
    }

    /// Reads a row's identifying attributes.
    ///
    /// Any missing or empty attribute yields `None`, as does a table oid that
    /// is not a number.
    pub fn row_key(self, row: &Element) -> Option<RowKey> {
        match self {
            Self::AttributeKeyed => Some(RowKey {
                table: TableRef::Named {
                    schema: non_empty(row, DATA_SCHEMA)?.to_string(),
                    table: non_empty(row, DATA_TABLE)?.to_string(),
                },
                record: non_empty(row, DATA_RECORD)?.to_string(),
            }),
            Self::IdentifierKeyed => Some(RowKey {
                table: TableRef::Oid(non_empty(row, DATA_TABLE_OID)?.parse().ok()?),
                record: non_empty(row, DATA_RECORD_ID)?.to_string(),
            }),
        }
    }
}

fn non_empty<'a>(element: &'a Element, name: &str) -> Option<&'a str> {
    element.get_attribute(name).filter(|v| !v.is_empty())
}

fn decode_segment(segment: &str) -> Option<String> {
    match urlencoding::decode(segment) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(e) => {
            log::debug!("[scheme] undecodable path segment {segment:?}: {e}");
            None
        }
    }
}
