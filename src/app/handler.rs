//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point through which the runtime
//! mutates [`AppState`]. It matches on the event, calls the panel or table
//! operation it maps to and returns whether a re-render is needed together
//! with the actions to execute.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`
//! - **Filter panel**: `FilterChanged`, `Search`, `ResetFilters`
//! - **Table**: `Sort`, `TableSearchText`, `FirstPage`, `PreviousPage`,
//!   `NextPage`, `LastPage`
//! - **Source**: `SourceResponse` with typed response variants
//!
//! # Example
//!
//! ```rust
//! use searchlist::app::{handle_event, Action, AppState, Event};
//! use searchlist::app::panel::PanelDefaults;
//!
//! let mut state = AppState::new(PanelDefaults::default());
//! let (render, actions) = handle_event(&mut state, &Event::Search)?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::PostToSource(_)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::app::modes::{FilterField, SortDirection};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::source::SourceResponse;

/// Events triggered by user input, lifecycle changes or source responses.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The table was inserted into the page; resolves its columns.
    Mount,

    /// A filter panel input changed.
    FilterChanged {
        field: FilterField,
        value: String,
    },

    /// The search button was pressed.
    Search,

    /// The reset button was pressed; clears inputs and searches again.
    ResetFilters,

    /// A sortable column header was clicked.
    Sort {
        field: String,
        direction: SortDirection,
    },

    /// The table's own free-text box changed.
    TableSearchText(String),

    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,

    /// Wraps a response from the source worker.
    SourceResponse(SourceResponse),
}

/// Processes an event, mutates application state and returns actions to execute.
///
/// The returned flag is `true` when the view changed and should be rendered
/// again.
///
/// # Errors
///
/// Reserved for failures while translating events; current transitions are
/// infallible.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Mount => Ok((false, vec![Action::PostToSource(state.table.mount())])),
        Event::FilterChanged { field, value } => {
            state.panel.on_field_changed(*field, value.as_str());
            Ok((true, vec![]))
        }
        Event::Search => {
            let request = state.panel.trigger_search(&mut state.table);
            Ok((true, vec![Action::PostToSource(request)]))
        }
        Event::ResetFilters => {
            let request = state.panel.reset_filters(&mut state.table);
            Ok((true, vec![Action::PostToSource(request)]))
        }
        Event::Sort { field, direction } => {
            if !state.table.sort_enabled() {
                tracing::debug!(field = %field, "sorting disabled, ignoring sort");
                return Ok((false, vec![]));
            }
            state.table.sort_by(field, *direction);
            Ok((true, vec![]))
        }
        Event::TableSearchText(text) => {
            if !state.table.search_enabled() {
                tracing::debug!("table search disabled, ignoring input");
                return Ok((false, vec![]));
            }
            state.table.apply_free_text_filter(text);
            Ok((true, vec![]))
        }
        Event::FirstPage | Event::PreviousPage => {
            if state.table.view().disable_back {
                return Ok((false, vec![]));
            }
            if matches!(event, Event::FirstPage) {
                state.table.first();
            } else {
                state.table.previous();
            }
            Ok((true, vec![]))
        }
        Event::NextPage | Event::LastPage => {
            if state.table.view().disable_forward {
                return Ok((false, vec![]));
            }
            if matches!(event, Event::NextPage) {
                state.table.next();
            } else {
                state.table.last();
            }
            Ok((true, vec![]))
        }
        Event::SourceResponse(response) => match response {
            SourceResponse::FieldMetadataLoaded { metadata } => {
                state.table.on_field_metadata(Ok(metadata.clone()));
                Ok((true, vec![]))
            }
            SourceResponse::FieldMetadataFailed { error } => {
                tracing::error!(error = %error, "field metadata unavailable");
                state.table.on_field_metadata(Err(error.clone()));
                Ok((true, vec![]))
            }
            SourceResponse::RecordsLoaded { request_id, records } => {
                let changed = state.table.on_records_fetched(*request_id, Ok(records.clone()));
                Ok((changed, vec![]))
            }
            SourceResponse::RecordsFailed { request_id, error } => {
                let changed = state.table.on_records_fetched(*request_id, Err(error.clone()));
                Ok((changed, vec![]))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::panel::PanelDefaults;
    use crate::domain::{FieldMetadata, RawRecord, UpstreamError, Value};
    use crate::source::SourceRequest;

    fn state(disable: bool) -> AppState {
        AppState::new(PanelDefaults {
            page_size: 2,
            disable_sort: disable,
            disable_search: disable,
            ..PanelDefaults::default()
        })
    }

    fn record(id: &str, name: &str) -> RawRecord {
        let mut record = RawRecord::new();
        record.insert("Id".to_string(), Value::from(id));
        record.insert("Name".to_string(), Value::from(name));
        record
    }

    fn search_with(state: &mut AppState, records: Vec<RawRecord>) {
        let (_, actions) = handle_event(state, &Event::Search).unwrap();
        let Action::PostToSource(SourceRequest::FetchRecords { request_id, .. }) = &actions[0] else {
            panic!("expected a record request, got {actions:?}");
        };
        let response = SourceResponse::RecordsLoaded {
            request_id: *request_id,
            records,
        };
        handle_event(state, &Event::SourceResponse(response)).unwrap();
    }

    #[test]
    fn mount_posts_metadata_request_without_render() {
        let mut state = state(true);
        let (render, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        assert!(!render);
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToSource(SourceRequest::FetchFieldMetadata { .. })]
        ));
    }

    #[test]
    fn filter_change_updates_expression() {
        let mut state = state(true);
        let event = Event::FilterChanged {
            field: FilterField::Category,
            value: "Energy".to_string(),
        };
        let (render, actions) = handle_event(&mut state, &event).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(
            state.panel.filter_expression().to_string(),
            "Id != NULL AND Industry = 'Energy'"
        );
    }

    #[test]
    fn search_posts_request_with_panel_criteria() {
        let mut state = state(true);
        handle_event(
            &mut state,
            &Event::FilterChanged {
                field: FilterField::FreeText,
                value: "acme".to_string(),
            },
        )
        .unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Search).unwrap();
        match &actions[0] {
            Action::PostToSource(SourceRequest::FetchRecords {
                request_id,
                filter_expression,
                ..
            }) => {
                assert_eq!(*request_id, 1);
                assert_eq!(filter_expression.bind().text, "Id != NULL AND Name LIKE :p0");
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn reset_clears_inputs_and_searches() {
        let mut state = state(true);
        handle_event(
            &mut state,
            &Event::FilterChanged {
                field: FilterField::FromDate,
                value: "2024-01-01".to_string(),
            },
        )
        .unwrap();

        let (render, actions) = handle_event(&mut state, &Event::ResetFilters).unwrap();
        assert!(render);
        assert_eq!(actions.len(), 1);
        assert_eq!(state.panel.filter_expression().to_string(), "Id != NULL");
        assert_eq!(state.table.criteria().filter_expression.to_string(), "Id != NULL");
    }

    #[test]
    fn sort_and_table_search_respect_disable_flags() {
        let mut state = state(true);
        search_with(&mut state, vec![record("1", "b"), record("2", "a")]);

        let sort = Event::Sort {
            field: "Name".to_string(),
            direction: SortDirection::Ascending,
        };
        assert_eq!(handle_event(&mut state, &sort).unwrap(), (false, vec![]));
        assert_eq!(
            handle_event(&mut state, &Event::TableSearchText("zz".into())).unwrap(),
            (false, vec![])
        );
        assert_eq!(state.table.view().filtered_records[0].display("Name"), "b");
    }

    #[test]
    fn sort_and_table_search_when_enabled() {
        let mut state = state(false);
        search_with(&mut state, vec![record("1", "b"), record("2", "a"), record("3", "c")]);

        let sort = Event::Sort {
            field: "Name".to_string(),
            direction: SortDirection::Ascending,
        };
        assert!(handle_event(&mut state, &sort).unwrap().0);
        assert_eq!(state.table.view().filtered_records[0].display("Name"), "a");

        handle_event(&mut state, &Event::TableSearchText("/3".into())).unwrap();
        assert_eq!(state.table.view().record_count, 1);
    }

    #[test]
    fn page_navigation_honours_button_state() {
        let mut state = state(true);
        search_with(
            &mut state,
            vec![record("1", "a"), record("2", "b"), record("3", "c"), record("4", "d"), record("5", "e")],
        );

        assert_eq!(handle_event(&mut state, &Event::PreviousPage).unwrap().0, false);

        assert!(handle_event(&mut state, &Event::NextPage).unwrap().0);
        assert_eq!(state.table.view().current_page, 2);

        assert!(handle_event(&mut state, &Event::LastPage).unwrap().0);
        assert_eq!(state.table.view().current_page, 3);
        assert_eq!(handle_event(&mut state, &Event::NextPage).unwrap().0, false);

        assert!(handle_event(&mut state, &Event::FirstPage).unwrap().0);
        assert_eq!(state.table.view().current_page, 1);
    }

    #[test]
    fn stale_record_response_does_not_render() {
        let mut state = state(true);
        handle_event(&mut state, &Event::Search).unwrap();
        handle_event(&mut state, &Event::Search).unwrap();

        let stale = SourceResponse::RecordsLoaded {
            request_id: 1,
            records: vec![record("1", "a")],
        };
        assert_eq!(
            handle_event(&mut state, &Event::SourceResponse(stale)).unwrap(),
            (false, vec![])
        );
        assert!(!state.table.has_records());
    }

    #[test]
    fn metadata_responses_update_table() {
        let mut state = state(true);
        let loaded = SourceResponse::FieldMetadataLoaded {
            metadata: vec![FieldMetadata {
                key: "industry".into(),
                label: "Industry".into(),
                display_type: "picklist".into(),
                api_name: "Industry".into(),
                object_plural_name: "Accounts".into(),
            }],
        };
        handle_event(&mut state, &Event::SourceResponse(loaded)).unwrap();
        assert_eq!(state.table.columns().len(), 2);

        let failed = SourceResponse::FieldMetadataFailed {
            error: UpstreamError::new("E", "boom", ""),
        };
        handle_event(&mut state, &Event::SourceResponse(failed)).unwrap();
        assert!(state.table.columns().is_empty());
        assert!(state.table.message().is_some());
    }

    #[test]
    fn record_failure_renders_error() {
        let mut state = state(true);
        let (_, actions) = handle_event(&mut state, &Event::Search).unwrap();
        let Action::PostToSource(SourceRequest::FetchRecords { request_id, .. }) = &actions[0] else {
            panic!("expected a record request");
        };
        let failed = SourceResponse::RecordsFailed {
            request_id: *request_id,
            error: UpstreamError::new("System.LimitException", "too many rows", ""),
        };
        let (render, _) = handle_event(&mut state, &Event::SourceResponse(failed)).unwrap();
        assert!(render);
        assert!(state.table.message().is_some_and(|m| m.is_error()));
    }
}
