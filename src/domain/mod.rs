//! Domain layer for searchlist.
//!
//! This module contains the core types shared by the filter panel, the record
//! table and record sources, independent of any rendering or transport.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: Raw and flattened record shapes
//! - [`criteria`]: Filter criteria and the structured filter expression
//! - [`column`]: Field metadata and table column descriptors
//!
//! # Examples
//!
//! ```
//! use searchlist::domain::{FilterExpression, Clause, Operator};
//!
//! let expr = FilterExpression::new("Id != NULL")
//!     .and(Clause::new("Name", Operator::Contains, "acme"));
//! assert_eq!(expr.to_string(), "Id != NULL AND Name LIKE '%acme%'");
//! ```

pub mod column;
pub mod criteria;
pub mod error;
pub mod record;

pub use column::{build_columns, ColumnDescriptor, ColumnSet, FieldMetadata};
pub use criteria::{BoundQuery, Clause, FilterCriteria, FilterExpression, Operator, Param};
pub use error::{Result, SearchListError, UpstreamError};
pub use record::{flatten, FlatRecord, RawRecord, Scalar, Value};
