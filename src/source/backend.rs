//! Record source abstraction.
//!
//! This module defines the [`RecordSource`] trait, the boundary between the
//! table and whatever backend actually holds the records. The trait is kept to
//! the two calls the table makes: resolving field metadata once at mount and
//! fetching records for a search.

use crate::domain::{FieldMetadata, FilterExpression, RawRecord, UpstreamError};

/// Result type returned by record sources.
pub type SourceResult<T> = std::result::Result<T, UpstreamError>;

/// Abstraction over the backend that stores records.
///
/// Implementations receive the structured [`FilterExpression`] and should
/// evaluate its bound form ([`FilterExpression::bind`]) rather than the
/// inline `Display` text.
///
/// # Implementations
///
/// - [`JsonFileSource`](crate::source::JsonFileSource): in-memory dataset
///   loaded from a JSON file
///
/// # Examples
///
/// ```no_run
/// use searchlist::domain::FilterExpression;
/// use searchlist::source::{JsonFileSource, RecordSource};
///
/// let source = JsonFileSource::from_path("accounts.json")?;
/// let fields = vec!["Name".to_string(), "Industry".to_string()];
/// let records = source.fetch_records("Account", &fields, &FilterExpression::new("Id != NULL"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait RecordSource {
    /// Fetches every record of `object_name` matching `filter`.
    ///
    /// Each returned record contains `Id` plus the requested fields.
    ///
    /// # Errors
    ///
    /// Returns the backend's error body if the query fails.
    fn fetch_records(
        &self,
        object_name: &str,
        field_list: &[String],
        filter: &FilterExpression,
    ) -> SourceResult<Vec<RawRecord>>;

    /// Resolves metadata for each requested field, in request order.
    ///
    /// # Errors
    ///
    /// Returns the backend's error body if the object or a field is unknown.
    fn fetch_field_metadata(
        &self,
        object_name: &str,
        field_list: &[String],
        filter: &FilterExpression,
    ) -> SourceResult<Vec<FieldMetadata>>;
}
