//! Sort state carried in the query string.

use std::fmt;

use crate::location::QueryParams;

/// Query parameter naming the sorted column.
pub const SORT_COLUMN: &str = "sort_column";
/// Query parameter holding the sort direction.
pub const SORT_DIRECTION: &str = "sort_direction";

/// Sort direction for ordering results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Reads a `sort_direction` value. Only `desc` means descending; any
    /// other value, or none, means ascending.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// The query value, also used as the header's direction class.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The column named by `sort_column`, if any.
pub fn sort_column(params: &QueryParams) -> Option<&str> {
    params.get(SORT_COLUMN)
}

/// The requested direction, ascending when absent.
pub fn sort_direction(params: &QueryParams) -> Direction {
    Direction::from_param(params.get(SORT_DIRECTION))
}

/// Parameters to navigate to after a click on the `clicked` header.
///
/// Clicking the column already sorted on flips the direction. Clicking any
/// other column switches `sort_column` and leaves `sort_direction` as it was.
pub fn next_params(params: &QueryParams, clicked: &str) -> QueryParams {
    if sort_column(params) == Some(clicked) {
        params.with(SORT_DIRECTION, sort_direction(params).toggle().as_str())
    } else {
        params.with(SORT_COLUMN, clicked)
    }
}

/// Ordering a records listing should use for a given query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub column: String,
    pub direction: Direction,
}

impl SortOrder {
    /// Resolves the requested order against the table's columns.
    ///
    /// An unknown or absent `sort_column` falls back to the first column.
    /// Returns `None` only when the table has no columns.
    pub fn resolve<S: AsRef<str>>(params: &QueryParams, columns: &[S]) -> Option<Self> {
        let requested = sort_column(params)
            .and_then(|name| columns.iter().find(|c| c.as_ref() == name));

        if let (None, Some(name)) = (requested, sort_column(params)) {
            log::debug!("[sort] unknown sort column {name:?}, using first column");
        }

        let column = requested.or_else(|| columns.first())?;

        Some(Self {
            column: column.as_ref().to_string(),
            direction: sort_direction(params),
        })
    }
}
