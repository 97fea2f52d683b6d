//! Composable UI component renderers.
//!
//! Each component turns one part of the view model into text lines.
//!
//! # Components
//!
//! - [`header`]: Title with object plural name and record count
//! - [`filters`]: Filter panel inputs and the table search box
//! - [`table`]: Column headers and page rows
//! - [`pager`]: Page position and navigation buttons
//! - [`message`]: "No Records" or error banner
//!
//! # Layout Modes
//!
//! - [`render_table_layout`]: Header + Filters + Table + Pager
//! - [`render_message_layout`]: Header + Filters + Message

mod filters;
mod header;
mod message;
mod pager;
mod table;

pub use filters::render_filters;
pub use header::render_header;
pub use message::render_message;
pub use pager::render_pager;
pub use table::{render_table, MAX_COLUMN_WIDTH};

use crate::ui::helpers::rule;
use crate::ui::viewmodel::{MessageBanner, TableViewModel};

fn render_chrome(vm: &TableViewModel, cols: usize) -> Vec<String> {
    let mut lines = render_header(&vm.header, cols);
    lines.push(rule(cols));
    lines.extend(render_filters(&vm.filters, vm.search_bar.as_ref(), cols));
    lines.push(rule(cols));
    lines
}

/// Renders the table layout.
///
/// ```text
/// [Header]
/// [Border]
/// [Filters]
/// [Border]
/// [Table Headers]
/// [Border]
/// [Table Rows]
/// [Border]
/// [Pager]
/// ```
#[must_use]
pub fn render_table_layout(vm: &TableViewModel, cols: usize) -> Vec<String> {
    let mut lines = render_chrome(vm, cols);
    lines.extend(render_table(&vm.columns, &vm.rows, cols));
    if let Some(pager) = &vm.pager {
        lines.push(rule(cols));
        lines.extend(render_pager(pager, cols));
    }
    lines
}

/// Renders the message layout; the banner takes the table's place.
#[must_use]
pub fn render_message_layout(vm: &TableViewModel, banner: &MessageBanner, cols: usize) -> Vec<String> {
    let mut lines = render_chrome(vm, cols);
    lines.extend(render_message(banner, cols));
    lines
}
