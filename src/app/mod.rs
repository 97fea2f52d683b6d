//! Application layer coordinating state, events, and actions.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Source Worker
//!                           ↑                                            ↓
//!                           └────────────── Source Responses ────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`message`]: The single-slot page message
//! - [`modes`]: Sort direction and filter input enums
//! - [`panel`]: Filter panel and the [`SearchTrigger`] capability
//! - [`state`]: Application state container and view model computation
//! - [`table`]: Record table with its filtered, sorted and paged views
//!
//! # Example
//!
//! ```rust
//! use searchlist::app::{handle_event, AppState, Event};
//! use searchlist::app::panel::PanelDefaults;
//!
//! let mut state = AppState::new(PanelDefaults::default());
//! let (_render, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod actions;
pub mod handler;
pub mod message;
pub mod modes;
pub mod panel;
pub mod state;
pub mod table;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use message::{MessageKind, PageMessage};
pub use modes::{FilterField, SortDirection};
pub use panel::{FilterPanel, PanelDefaults, SearchTrigger};
pub use state::AppState;
pub use table::{RecordTable, ViewState};
