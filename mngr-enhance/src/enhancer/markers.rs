use pagedom::Document;

use super::Enhancer;
use crate::location::{Location, QueryParams};
use crate::scheme::DATA_COLUMN;
use crate::sort::{self, Direction};

impl Enhancer {
    /// Marks the sidebar link of the table the page belongs to as current
    /// and disabled. Returns the marked link's id.
    pub fn mark_active_nav_link<A>(
        &self,
        document: &mut Document<A>,
        location: &Location,
    ) -> Option<String> {
        let Some(table) = self.config.scheme.table_from_path(location.path()) else {
            log::debug!("[enhance] {} is not a table page", location.path());
            return None;
        };

        let Some(id) = document
            .query_selector_all(&self.selectors.sidebar_links)
            .into_iter()
            .find(|link| table.matches_link(link))
            .map(|link| link.id.clone())
        else {
            log::debug!("[enhance] no sidebar link for table {table}");
            return None;
        };

        let link = document.element_mut(&id)?;
        link.add_class(self.config.classes.current.as_str());
        link.add_class(self.config.classes.disabled.as_str());
        Some(id)
    }

    /// Marks the content link pointing exactly at the current path.
    pub fn mark_active_tab_link<A>(
        &self,
        document: &mut Document<A>,
        location: &Location,
    ) -> Option<String> {
        let path = location.path();
        let Some(id) = document
            .query_selector_all(&self.selectors.content_links)
            .into_iter()
            .find(|link| link.get_attribute("href") == Some(path))
            .map(|link| link.id.clone())
        else {
            log::trace!("[enhance] no tab link for {path}");
            return None;
        };

        document
            .element_mut(&id)?
            .add_class(self.config.classes.current.as_str());
        Some(id)
    }

    /// Marks the header named by `sort_column` as sorted, with its direction.
    ///
    /// Only the first matching header is marked.
    pub fn render_sort_indicator<A>(
        &self,
        document: &mut Document<A>,
        params: &QueryParams,
    ) -> Option<(String, Direction)> {
        let column = sort::sort_column(params)?;
        let direction = sort::sort_direction(params);

        let Some(id) = document
            .query_selector_all(&self.selectors.table_headers)
            .into_iter()
            .find(|th| th.get_attribute(DATA_COLUMN) == Some(column))
            .map(|th| th.id.clone())
        else {
            log::debug!("[enhance] no header for sort column {column:?}");
            return None;
        };

        let header = document.element_mut(&id)?;
        header.add_class(self.config.classes.sorted.as_str());
        header.add_class(direction.as_str());
        Some((id, direction))
    }
}
