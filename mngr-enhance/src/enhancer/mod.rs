//! The page enhancer.
//!
//! [`Enhancer::enhance`] runs every enhancement once against a parsed
//! document. Listeners it binds carry an [`Action`] payload; clicks are turned
//! into a [`Navigation`] by [`Enhancer::handle_click`]. Every precondition
//! failure (no match, missing attribute, missing element) skips the affected
//! enhancement without an error.

mod bindings;
mod markers;

use std::fmt;

use pagedom::{Document, Event, Markup, Selector};
use url::Url;

use crate::config::{EnhancerConfig, Selectors};
use crate::error::{Error, Result};
use crate::location::Location;
use crate::sort::Direction;

/// What a bound listener does when its event arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the row's record for editing on a double-click.
    OpenRecord,
    /// Sort the table by `column`.
    Sort { column: String },
}

/// A full-page navigation requested by a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    url: Url,
}

impl Navigation {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The location the browser ends up on.
    pub fn into_location(self) -> Location {
        Location::from(self.url)
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// What one enhancement pass applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Sidebar link marked current and disabled.
    pub nav_link: Option<String>,
    /// Content link marked current.
    pub tab_link: Option<String>,
    /// Header carrying the sort indicator, with its direction.
    pub sorted_header: Option<(String, Direction)>,
    /// Rows given a double-click listener.
    pub bound_rows: usize,
    /// Headers given a sort listener.
    pub bound_headers: usize,
}

#[derive(Debug, Clone)]
struct CompiledSelectors {
    table_rows: Selector,
    table_headers: Selector,
    sidebar_links: Selector,
    content_links: Selector,
}

impl CompiledSelectors {
    fn compile(selectors: &Selectors) -> Result<Self> {
        let parse = |text: &str| Selector::parse(text).map_err(|e| Error::selector(text, e));

        Ok(Self {
            table_rows: parse(selectors.table_rows.as_str())?,
            table_headers: parse(selectors.table_headers.as_str())?,
            sidebar_links: parse(selectors.sidebar_links.as_str())?,
            content_links: parse(selectors.content_links.as_str())?,
        })
    }
}

/// Enhances record pages according to an [`EnhancerConfig`].
#[derive(Debug, Clone)]
pub struct Enhancer {
    config: EnhancerConfig,
    selectors: CompiledSelectors,
}

impl Enhancer {
    /// Creates an enhancer, compiling the configured selectors.
    pub fn new(config: EnhancerConfig) -> Result<Self> {
        let selectors = CompiledSelectors::compile(&config.selectors)?;
        Ok(Self { config, selectors })
    }

    pub fn config(&self) -> &EnhancerConfig {
        &self.config
    }

    /// Schedules enhancement for when `document` is parsed.
    ///
    /// Runs right away on a parsed document, otherwise on content loaded.
    /// Booting twice binds listeners twice.
    pub fn boot(&self, document: &mut Document<Action>, location: Location) {
        let enhancer = self.clone();
        document.on_ready(move |document| {
            let report = enhancer.enhance(document, &location);
            log::debug!("[enhance] {location}: {report:?}");
        });
    }

    /// Runs every enhancement once, in page order.
    pub fn enhance(&self, document: &mut Document<Action>, location: &Location) -> Report {
        let params = location.params();

        Report {
            nav_link: self.mark_active_nav_link(document, location),
            tab_link: self.mark_active_tab_link(document, location),
            sorted_header: self.render_sort_indicator(document, &params),
            bound_rows: self.bind_row_navigation(document),
            bound_headers: self.bind_column_sorting(document),
        }
    }

    /// Delivers a click and returns the navigation it triggers, if any.
    ///
    /// Listeners run in bubbling order and the first navigation wins, since
    /// navigating unloads the page.
    pub fn handle_click(
        &self,
        document: &Document<Action>,
        location: &Location,
        event: &Event,
    ) -> Option<Navigation> {
        document
            .dispatch(event)
            .into_iter()
            .find_map(|(current, action)| match action {
                Action::OpenRecord => self.open_record(current, event, location),
                Action::Sort { column } => Some(self.sort_by(column, location)),
            })
    }
}

/// A document loaded at a location, with the enhancer booted on it.
#[derive(Debug)]
pub struct Page {
    document: Document<Action>,
    location: Location,
    enhancer: Enhancer,
}

impl Page {
    /// Loads `markup` the way a browser runs the script: booted while the
    /// document is still loading, enhanced once content has loaded.
    pub fn open(enhancer: Enhancer, markup: Markup, location: Location) -> Self {
        let mut document = Document::loading(markup);
        enhancer.boot(&mut document, location.clone());
        document.finish_parsing();

        Self {
            document,
            location,
            enhancer,
        }
    }

    pub fn document(&self) -> &Document<Action> {
        &self.document
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn enhancer(&self) -> &Enhancer {
        &self.enhancer
    }

    /// Clicks `target` with the given click counter.
    pub fn click(&self, target: &str, detail: u32) -> Option<Navigation> {
        self.enhancer
            .handle_click(&self.document, &self.location, &Event::click(target, detail))
    }

    pub fn double_click(&self, target: &str) -> Option<Navigation> {
        self.click(target, 2)
    }
}
