//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! runtime executes them in order and feeds any responses back as events.
//!
//! # Example
//!
//! ```rust
//! use searchlist::app::Action;
//! use searchlist::domain::FilterExpression;
//! use searchlist::source::SourceRequest;
//!
//! let actions = vec![Action::PostToSource(SourceRequest::fetch_field_metadata(
//!     "Account".to_string(),
//!     vec!["Name".to_string()],
//!     FilterExpression::new("Id != NULL"),
//! ))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::source::SourceRequest;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Posts a request to the record source worker.
    ///
    /// The worker answers with a [`crate::source::SourceResponse`], delivered
    /// back to the handler as [`crate::app::Event::SourceResponse`].
    PostToSource(SourceRequest),
}
