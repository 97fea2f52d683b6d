//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `TableViewModel`
//! 2. **Component Rendering**: Delegate to the layout matching the view model
//!
//! # Example
//!
//! ```rust
//! use searchlist::app::AppState;
//! use searchlist::app::panel::PanelDefaults;
//! use searchlist::ui::render;
//!
//! let state = AppState::new(PanelDefaults::default());
//! let text = render(&state, 80);
//! assert!(text.starts_with(' '));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::TableViewModel;

/// Renders the filter panel and table as plain text, `cols` characters wide.
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, cols)
}

/// Renders a view model; a message banner replaces the table when present.
#[must_use]
pub fn render_viewmodel(vm: &TableViewModel, cols: usize) -> String {
    let lines = match &vm.message {
        Some(banner) => components::render_message_layout(vm, banner, cols),
        None => components::render_table_layout(vm, cols),
    };
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::{CellItem, ColumnHeader, HeaderInfo, MessageBanner, PagerInfo, RowItem};

    fn table_vm() -> TableViewModel {
        TableViewModel {
            header: HeaderInfo {
                title: "Accounts (1)".to_string(),
            },
            columns: vec![ColumnHeader {
                label: "Name".to_string(),
                sortable: false,
                sorted: None,
            }],
            rows: vec![RowItem {
                cells: vec![CellItem {
                    text: "Acme".to_string(),
                    link: Some("/001".to_string()),
                }],
            }],
            pager: Some(PagerInfo {
                begin_index: 1,
                end_index: 1,
                record_count: 1,
                current_page: 1,
                total_pages: 1,
                back_enabled: false,
                forward_enabled: false,
            }),
            ..TableViewModel::default()
        }
    }

    #[test]
    fn table_layout_shows_rows_and_pager() {
        let text = render_viewmodel(&table_vm(), 40);
        assert!(text.contains("Accounts (1)"));
        assert!(text.lines().any(|line| line == "Acme"));
        assert!(text.contains("Page 1 of 1 (1-1 of 1)"));
    }

    #[test]
    fn message_replaces_table() {
        let vm = TableViewModel {
            message: Some(MessageBanner {
                title: "Error".to_string(),
                summary: "System.QueryException bad".to_string(),
                icon: "utility:error".to_string(),
                is_error: true,
            }),
            ..table_vm()
        };
        let text = render_viewmodel(&vm, 40);
        assert!(text.contains("[error] Error"));
        assert!(!text.lines().any(|line| line == "Acme"));
        assert!(!text.contains("Page 1"));
    }
}
