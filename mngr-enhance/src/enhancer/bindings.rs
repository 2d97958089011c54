use pagedom::{Document, Element, Event, EventType};

use super::{Action, Enhancer, Navigation};
use crate::location::Location;
use crate::scheme::DATA_COLUMN;
use crate::sort;

impl Enhancer {
    /// Binds a double-click listener to every data row. Returns the count.
    pub fn bind_row_navigation(&self, document: &mut Document<Action>) -> usize {
        let rows = document.select_ids(&self.selectors.table_rows);
        for id in &rows {
            document.add_event_listener(id.as_str(), EventType::Click, Action::OpenRecord);
        }
        rows.len()
    }

    /// Binds a sort listener to every header cell that names a column.
    /// Returns the count.
    pub fn bind_column_sorting(&self, document: &mut Document<Action>) -> usize {
        let headers: Vec<(String, String)> = document
            .query_selector_all(&self.selectors.table_headers)
            .into_iter()
            .filter_map(|th| match th.get_attribute(DATA_COLUMN) {
                Some(column) if !column.is_empty() => Some((th.id.clone(), column.to_string())),
                _ => {
                    log::trace!("[enhance] header {} has no column", th.id);
                    None
                }
            })
            .collect();

        let count = headers.len();
        for (id, column) in headers {
            document.add_event_listener(id, EventType::Click, Action::Sort { column });
        }
        count
    }

    pub(super) fn open_record(
        &self,
        row: &Element,
        event: &Event,
        location: &Location,
    ) -> Option<Navigation> {
        if event.detail() < 2 {
            return None;
        }

        let Some(key) = self.config.scheme.row_key(row) else {
            log::debug!("[enhance] row {} lacks record attributes", row.id);
            return None;
        };

        match location.join(&key.edit_path()) {
            Ok(url) => Some(Navigation::new(url)),
            Err(e) => {
                log::debug!("[enhance] cannot build edit url for {}: {e}", row.id);
                None
            }
        }
    }

    pub(super) fn sort_by(&self, column: &str, location: &Location) -> Navigation {
        let next = sort::next_params(&location.params(), column);
        Navigation::new(location.with_params(&next))
    }
}
