//! Searchlist: a filter panel and record table for searching, sorting and
//! paginating records fetched from a record source.
//!
//! - A filter panel composes free text, category and a date range into a
//!   parameterized filter expression
//! - A record table fetches matching records, flattens them one level deep and
//!   keeps filtered, sorted and paged views in memory
//! - Stale responses from superseded searches are discarded
//! - A single message slot shows "No Records" or upstream errors

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs) / Runtime (runtime.rs)            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Filter panel and record table                    │
//! │  - Event handling and actions                       │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                     ┌───────────────┐
//! │ UI Layer      │                     │ Source Layer  │
//! │ (ui/)         │                     │ (source/)     │
//! │ - Plain text  │                     │ - RecordSource│
//! │ - Components  │                     │ - JSON dataset│
//! └───────────────┘                     │ - Worker      │
//!                                       └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/)                                   │
//! │  - Records, flattening, criteria, columns, errors   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, JSON-lines span export       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Records, filter criteria, columns and errors
//! - [`source`]: Record source trait, JSON dataset source and worker
//! - [`runtime`]: Event loop tying state and worker together
//! - [`ui`]: Plain-text rendering
//! - [`observability`]: Logging and span export
//!
//! # Configuration
//!
//! ```toml
//! object_name = "Account"
//! field_list = ["Name", "Industry", "Phone", "CreatedDate"]
//! base_filter = "Id != NULL"
//! page_size = 200
//! category_options = ["Consulting", "Retail", "Energy"]
//! disable_sort = false
//! disable_search = false
//! trace_level = "debug"
//! trace_file = "searchlist-spans.jsonl"
//! ```
//!
//! # Example
//!
//! ```rust
//! use searchlist::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_render, actions) = handle_event(&mut state, &Event::Search)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), searchlist::SearchListError>(())
//! ```

pub mod app;
pub mod domain;
pub mod observability;
pub mod runtime;
pub mod source;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, FilterField, SortDirection};
pub use domain::{Result, SearchListError};
pub use runtime::Runtime;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::app::PanelDefaults;

/// Page size used when none or an invalid one is configured.
pub const DEFAULT_PAGE_SIZE: usize = 200;

/// Runtime configuration.
///
/// Every field has a default, so a partial TOML file or map is enough.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Object to query. Default: `Account`
    pub object_name: String,

    /// Fields to fetch, in column order.
    pub field_list: Vec<String>,

    /// Trusted condition every filter expression starts from.
    pub base_filter: String,

    /// Rows per page. Zero falls back to [`DEFAULT_PAGE_SIZE`].
    pub page_size: usize,

    /// Options offered by the category selector.
    pub category_options: Vec<String>,

    pub disable_sort: bool,
    pub disable_search: bool,

    /// Tracing level: `trace`, `debug`, `info`, `warn` or `error`.
    /// `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,

    /// JSON-lines file receiving exported spans; export is off when unset.
    pub trace_file: Option<PathBuf>,

    /// Size at which the span file is rotated.
    pub trace_max_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        let panel = PanelDefaults::default();
        Self {
            object_name: panel.object_name,
            field_list: panel.field_list,
            base_filter: panel.base_filter,
            page_size: panel.page_size,
            category_options: panel.category_options,
            disable_sort: panel.disable_sort,
            disable_search: panel.disable_search,
            trace_level: None,
            trace_file: None,
            trace_max_bytes: observability::DEFAULT_MAX_BYTES,
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

impl Config {
    /// Parses configuration from a string map, e.g. `key=value` pairs.
    ///
    /// # Parsing Rules
    ///
    /// - `field_list`, `category_options`: comma-separated, empty items dropped;
    ///   an empty list keeps the default
    /// - `page_size`: positive integer, otherwise the default
    /// - `disable_sort`, `disable_search`: `true`/`false`, otherwise the default
    /// - `trace_max_bytes`: integer, otherwise the default
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use searchlist::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("field_list".to_string(), "Name, Phone".to_string());
    /// map.insert("page_size".to_string(), "abc".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.field_list, vec!["Name", "Phone"]);
    /// assert_eq!(config.page_size, 200);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let list = |key: &str, fallback: Vec<String>| {
            map.get(key)
                .map(|value| split_list(value))
                .filter(|items| !items.is_empty())
                .unwrap_or(fallback)
        };
        let flag = |key: &str, fallback: bool| {
            map.get(key)
                .and_then(|value| value.trim().parse::<bool>().ok())
                .unwrap_or(fallback)
        };

        Self {
            object_name: map
                .get("object_name")
                .cloned()
                .unwrap_or(defaults.object_name),
            field_list: list("field_list", defaults.field_list),
            base_filter: map
                .get("base_filter")
                .cloned()
                .unwrap_or(defaults.base_filter),
            page_size: map
                .get("page_size")
                .and_then(|value| value.trim().parse::<usize>().ok())
                .filter(|size| *size > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
            category_options: list("category_options", defaults.category_options),
            disable_sort: flag("disable_sort", defaults.disable_sort),
            disable_search: flag("disable_search", defaults.disable_search),
            trace_level: map.get("trace_level").cloned(),
            trace_file: map.get("trace_file").map(PathBuf::from),
            trace_max_bytes: map
                .get("trace_max_bytes")
                .and_then(|value| value.trim().parse::<u64>().ok())
                .unwrap_or(defaults.trace_max_bytes),
        }
    }

    /// Parses a TOML document; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SearchListError::Config`] if the document is not valid TOML
    /// or a value has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| SearchListError::Config(e.to_string()))?;
        Ok(config.normalized())
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SearchListError::Io`] if the file cannot be read, or
    /// [`SearchListError::Config`] if it cannot be parsed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn normalized(mut self) -> Self {
        if self.page_size == 0 {
            tracing::warn!(default = DEFAULT_PAGE_SIZE, "page_size must be positive, using default");
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }

    /// Filter panel defaults derived from this configuration.
    #[must_use]
    pub fn panel_defaults(&self) -> PanelDefaults {
        PanelDefaults {
            object_name: self.object_name.clone(),
            field_list: self.field_list.clone(),
            base_filter: self.base_filter.clone(),
            page_size: self.page_size,
            disable_sort: self.disable_sort,
            disable_search: self.disable_search,
            category_options: self.category_options.clone(),
        }
    }
}

/// Creates the application state for `config`.
///
/// The returned state has not fetched anything yet: dispatch
/// [`Event::Mount`] to resolve columns and [`Event::Search`] to load records.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        object_name = %config.object_name,
        page_size = config.page_size,
        "initializing searchlist"
    );
    AppState::new(config.panel_defaults())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_panel_defaults() {
        let config = Config::default();
        assert_eq!(config.panel_defaults(), PanelDefaults::default());
        assert_eq!(config.trace_file, None);
    }

    #[test]
    fn from_map_parses_lists_and_flags() {
        let map = BTreeMap::from([
            ("object_name".to_string(), "Contact".to_string()),
            ("category_options".to_string(), "A, ,B".to_string()),
            ("disable_sort".to_string(), "false".to_string()),
            ("disable_search".to_string(), "maybe".to_string()),
            ("page_size".to_string(), "0".to_string()),
        ]);
        let config = Config::from_map(&map);

        assert_eq!(config.object_name, "Contact");
        assert_eq!(config.category_options, vec!["A", "B"]);
        assert!(!config.disable_sort);
        assert!(config.disable_search);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn toml_keeps_defaults_for_missing_keys() {
        let config = Config::from_toml_str("page_size = 50\ndisable_search = false\n").unwrap();
        assert_eq!(config.page_size, 50);
        assert!(!config.disable_search);
        assert_eq!(config.object_name, "Account");
    }

    #[test]
    fn toml_zero_page_size_falls_back() {
        let config = Config::from_toml_str("page_size = 0").unwrap();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn toml_type_errors_are_config_errors() {
        let err = Config::from_toml_str("page_size = \"many\"").unwrap_err();
        assert!(matches!(err, SearchListError::Config(_)));
    }

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "object_name = \"Opportunity\"\ntrace_file = \"spans.jsonl\"").unwrap();

        let config = Config::from_toml_file(file.path()).unwrap();
        assert_eq!(config.object_name, "Opportunity");
        assert_eq!(config.trace_file, Some(PathBuf::from("spans.jsonl")));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, SearchListError::Io(_)));
    }

    #[test]
    fn initialize_uses_configured_criteria() {
        let config = Config {
            object_name: "Contact".to_string(),
            page_size: 25,
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.table.criteria().object_name, "Contact");
        assert_eq!(state.table.criteria().page_size, 25);
    }
}
