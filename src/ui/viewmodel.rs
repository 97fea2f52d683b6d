//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use searchlist::ui::viewmodel::{CellItem, HeaderInfo, RowItem, TableViewModel};
//!
//! let vm = TableViewModel {
//!     header: HeaderInfo { title: "Accounts (1)".to_string() },
//!     rows: vec![RowItem {
//!         cells: vec![CellItem { text: "Acme".to_string(), link: Some("/001".to_string()) }],
//!     }],
//!     ..TableViewModel::default()
//! };
//! assert_eq!(vm.rows.len(), 1);
//! ```

use crate::app::modes::SortDirection;

/// Complete view model for one render of the filter panel and table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableViewModel {
    pub header: HeaderInfo,

    /// Current filter panel inputs.
    pub filters: FilterInfo,

    /// The table's own free-text box, present only when table search is enabled.
    pub search_bar: Option<SearchBarInfo>,

    pub columns: Vec<ColumnHeader>,

    /// Rows of the current page.
    pub rows: Vec<RowItem>,

    /// Page position and button state; absent when there is nothing to page.
    pub pager: Option<PagerInfo>,

    /// Alert banner shown instead of the table.
    pub message: Option<MessageBanner>,
}

/// Header display information, e.g. `Accounts (450)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInfo {
    pub search_text: String,
    pub category: String,
    pub from_date: String,
    pub to_date: String,
    pub category_options: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
}

/// A column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub label: String,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// Direction of the active sort when this column is the sort field.
    pub sorted: Option<SortDirection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowItem {
    /// One cell per column, in column order.
    pub cells: Vec<CellItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellItem {
    pub text: String,
    /// Link target for `url` columns.
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagerInfo {
    pub begin_index: usize,
    pub end_index: usize,
    pub record_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub back_enabled: bool,
    pub forward_enabled: bool,
}

/// Alert banner for the "No Records" notice or an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBanner {
    pub title: String,
    pub summary: String,
    pub icon: String,
    pub is_error: bool,
}
