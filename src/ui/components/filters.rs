//! Filter panel component renderer.
//!
//! Shows the active filter inputs on one line and, when table search is
//! enabled, the table's own free-text box below it.

use crate::ui::helpers::truncate;
use crate::ui::viewmodel::{FilterInfo, SearchBarInfo};

/// Renders the filter summary and the optional table search box.
///
/// Empty inputs are listed as `-`; the category shows its available options.
#[must_use]
pub fn render_filters(filters: &FilterInfo, search_bar: Option<&SearchBarInfo>, cols: usize) -> Vec<String> {
    let or_dash = |value: &str| if value.is_empty() { "-".to_string() } else { value.to_string() };

    let line = format!(
        "Search: {}  Category: {} [{}]  From: {}  To: {}",
        or_dash(&filters.search_text),
        or_dash(&filters.category),
        filters.category_options.join("|"),
        or_dash(&filters.from_date),
        or_dash(&filters.to_date),
    );

    let mut lines = vec![truncate(&line, cols)];
    if let Some(search) = search_bar {
        lines.push(truncate(&format!("Find in table: {}", search.query), cols));
    }
    lines
}
