//! Progressive enhancement for mngr's server-rendered record tables.
//!
//! The enhancer marks the active sidebar and tab links, renders the current
//! sort indicator, and binds listeners that turn row double-clicks and header
//! clicks into navigations. All of it runs against a [`pagedom::Document`]
//! snapshot, so the behaviour is testable without a browser.

pub mod config;
pub mod enhancer;
pub mod error;
pub mod location;
pub mod routes;
pub mod scheme;
pub mod sort;

pub use config::EnhancerConfig;
pub use enhancer::{Action, Enhancer, Navigation, Page, Report};
pub use error::{Error, Result};
pub use location::{Location, QueryParams};
pub use scheme::{KeyScheme, RowKey, TableRef};
pub use sort::{Direction, SortOrder};
