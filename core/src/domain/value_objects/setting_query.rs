//! Filters and paging for the settings list.

use ve_shared::types::{Pagination, SortOrder};

/// Columns the settings list may be ordered by
pub const SORTABLE_COLUMNS: [&str; 5] = ["set_order", "set_label", "set_group", "set_key", "created_date"];

const DEFAULT_ORDER: &str = "set_order";

/// Settings list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingQuery {
    /// Case-insensitive match on label or value
    pub keyword: Option<String>,
    pub is_active: Option<bool>,
    pub set_group: Option<String>,
    pub pagination: Pagination,
    pub(crate) order: &'static str,
    pub sort: SortOrder,
}

impl Default for SettingQuery {
    fn default() -> Self {
        Self {
            keyword: None,
            is_active: None,
            set_group: None,
            pagination: Pagination::default(),
            order: DEFAULT_ORDER,
            sort: SortOrder::Asc,
        }
    }
}

impl SettingQuery {
    /// Sets the order column; unknown columns fall back to `set_order`
    pub fn with_order(mut self, column: Option<&str>) -> Self {
        self.order = column
            .and_then(|c| SORTABLE_COLUMNS.iter().copied().find(|known| *known == c))
            .unwrap_or(DEFAULT_ORDER);
        self
    }

    /// Whitelisted column name, safe to splice into SQL
    pub fn order_column(&self) -> &'static str {
        self.order
    }

    /// Trimmed keyword, `None` when blank
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}
