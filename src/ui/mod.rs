//! Plain-text rendering of the filter panel and record table.
//!
//! ```text
//! AppState → compute_viewmodel → TableViewModel → render → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Character-aware width helpers

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use viewmodel::{
    CellItem, ColumnHeader, FilterInfo, HeaderInfo, MessageBanner, PagerInfo, RowItem,
    SearchBarInfo, TableViewModel,
};
