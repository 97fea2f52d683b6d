//! JSON file-backed record source.
//!
//! Loads a whole dataset into memory and answers metadata and record queries
//! from it. Filters are evaluated from the bound query parameters, never from
//! the inline expression text.
//!
//! # File Format
//!
//! ```json
//! {
//!   "objects": {
//!     "Account": {
//!       "plural_name": "Accounts",
//!       "fields": [
//!         { "api_name": "Name", "label": "Account Name" },
//!         { "api_name": "Phone", "label": "Phone", "display_type": "phone" }
//!       ],
//!       "records": [
//!         { "Id": "001", "Name": "Acme", "Phone": "555-0100", "Owner": { "Name": "Ada" } }
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! The base condition of a filter expression is trusted configuration and is
//! not interpreted; only the user clauses restrict the result.

use crate::domain::error::{Result, SearchListError};
use crate::domain::{
    Clause, FieldMetadata, FilterExpression, Operator, Param, RawRecord, UpstreamError, Value,
};
use crate::source::backend::{RecordSource, SourceResult};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const QUERY_EXCEPTION: &str = "System.QueryException";

#[derive(Debug, Clone, Deserialize)]
struct Dataset {
    #[serde(default)]
    objects: BTreeMap<String, ObjectData>,
}

#[derive(Debug, Clone, Deserialize)]
struct ObjectData {
    plural_name: String,
    #[serde(default)]
    fields: Vec<FieldDefinition>,
    #[serde(default)]
    records: Vec<RawRecord>,
}

#[derive(Debug, Clone, Deserialize)]
struct FieldDefinition {
    api_name: String,
    label: String,
    #[serde(default = "default_display_type")]
    display_type: String,
}

fn default_display_type() -> String {
    "text".to_string()
}

/// In-memory record source loaded from a JSON dataset.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    data: Dataset,
}

impl JsonFileSource {
    /// Loads a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid dataset.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading JSON dataset");

        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parses a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SearchListError::Dataset`] if the text is not a valid dataset.
    pub fn from_json(contents: &str) -> Result<Self> {
        let data: Dataset = serde_json::from_str(contents)
            .map_err(|e| SearchListError::Dataset(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(objects = data.objects.len(), "dataset loaded");
        Ok(Self { data })
    }

    fn object(&self, object_name: &str) -> SourceResult<&ObjectData> {
        self.data.objects.get(object_name).ok_or_else(|| {
            UpstreamError::new(
                QUERY_EXCEPTION,
                format!("sObject type '{object_name}' is not supported."),
                "",
            )
        })
    }
}

impl RecordSource for JsonFileSource {
    fn fetch_records(
        &self,
        object_name: &str,
        field_list: &[String],
        filter: &FilterExpression,
    ) -> SourceResult<Vec<RawRecord>> {
        let _span = tracing::debug_span!("json_fetch_records",
            object_name = %object_name,
            clauses = filter.clauses().len()
        )
        .entered();

        let object = self.object(object_name)?;
        let params = filter.bind().params;

        let records: Vec<RawRecord> = object
            .records
            .iter()
            .filter(|record| {
                filter
                    .clauses()
                    .iter()
                    .zip(&params)
                    .all(|(clause, param)| clause_matches(record, clause, param))
            })
            .map(|record| project(record, field_list))
            .collect();

        tracing::debug!(count = records.len(), "records matched");
        Ok(records)
    }

    fn fetch_field_metadata(
        &self,
        object_name: &str,
        field_list: &[String],
        _filter: &FilterExpression,
    ) -> SourceResult<Vec<FieldMetadata>> {
        let _span = tracing::debug_span!("json_fetch_field_metadata",
            object_name = %object_name,
            fields = field_list.len()
        )
        .entered();

        let object = self.object(object_name)?;

        field_list
            .iter()
            .map(|requested| -> SourceResult<FieldMetadata> {
                let definition = object
                    .fields
                    .iter()
                    .find(|f| f.api_name.eq_ignore_ascii_case(requested))
                    .ok_or_else(|| {
                        UpstreamError::new(
                            QUERY_EXCEPTION,
                            format!("No such column '{requested}' on entity '{object_name}'."),
                            "",
                        )
                    })?;

                Ok(FieldMetadata {
                    key: requested.to_lowercase(),
                    label: definition.label.clone(),
                    display_type: definition.display_type.clone(),
                    api_name: definition.api_name.clone(),
                    object_plural_name: object.plural_name.clone(),
                })
            })
            .collect()
    }
}

/// Keeps `Id` and the top-level keys named by `field_list`.
///
/// Dotted relationship fields such as `Owner.Name` keep the whole `Owner`
/// record.
fn project(record: &RawRecord, field_list: &[String]) -> RawRecord {
    let mut keep: Vec<&str> = field_list
        .iter()
        .filter_map(|f| f.split('.').next())
        .collect();
    keep.push(crate::domain::record::ID_FIELD);

    record
        .iter()
        .filter(|(key, _)| keep.iter().any(|k| k.eq_ignore_ascii_case(key)))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Resolves a possibly dotted field path to its display text.
fn field_text(record: &RawRecord, path: &str) -> Option<String> {
    let mut parts = path.split('.');
    let mut value = record.get(parts.next()?)?;
    for part in parts {
        match value {
            Value::Record(children) => value = children.get(part)?,
            Value::Scalar(_) => return None,
        }
    }
    match value {
        Value::Scalar(scalar) if !scalar.is_empty() => Some(scalar.to_string()),
        _ => None,
    }
}

fn clause_matches(record: &RawRecord, clause: &Clause, param: &Param) -> bool {
    let Some(actual) = field_text(record, &clause.field) else {
        return false;
    };

    match (clause.operator, param) {
        (Operator::Contains, Param::Text(pattern)) => {
            like_matches(&actual.to_lowercase(), &pattern.to_lowercase())
        }
        (Operator::Equals, expected) => actual.eq_ignore_ascii_case(&expected.to_string()),
        (Operator::AtLeast | Operator::AtMost, Param::Date(bound)) => {
            leading_date(&actual).is_some_and(|date| {
                if clause.operator == Operator::AtLeast {
                    date >= *bound
                } else {
                    date <= *bound
                }
            })
        }
        (Operator::AtLeast, Param::Text(bound)) => actual.as_str() >= bound.as_str(),
        (Operator::AtMost, Param::Text(bound)) => actual.as_str() <= bound.as_str(),
        (Operator::Contains, Param::Date(_)) => false,
    }
}

/// Parses the `YYYY-MM-DD` prefix of a date or datetime value.
fn leading_date(value: &str) -> Option<NaiveDate> {
    let prefix = value.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Matches `text` against a `LIKE` pattern.
///
/// `%` matches any run of characters and `_` matches exactly one character.
fn like_matches(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    let (mut t, mut p) = (0, 0);
    // Position after the last `%` seen, and the text position it is retried from.
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some('%') => {
                p += 1;
                backtrack = Some((p, t));
            }
            Some(&c) if c == '_' || c == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match backtrack {
                Some((resume, from)) => {
                    p = resume;
                    t = from + 1;
                    backtrack = Some((resume, t));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '%')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DATASET: &str = r#"{
        "objects": {
            "Account": {
                "plural_name": "Accounts",
                "fields": [
                    { "api_name": "Name", "label": "Account Name" },
                    { "api_name": "Industry", "label": "Industry", "display_type": "picklist" },
                    { "api_name": "Phone", "label": "Phone", "display_type": "phone" },
                    { "api_name": "CreatedDate", "label": "Created Date", "display_type": "datetime" }
                ],
                "records": [
                    { "Id": "001", "Name": "Acme Corp", "Industry": "Energy", "Phone": "555-0100",
                      "CreatedDate": "2024-02-10T09:00:00.000+0000", "Owner": { "Name": "Ada" } },
                    { "Id": "002", "Name": "Globex", "Industry": "Retail", "Phone": "555-0101",
                      "CreatedDate": "2024-06-01T12:30:00.000+0000" },
                    { "Id": "003", "Name": "Initech", "Industry": "Consulting", "Phone": null,
                      "CreatedDate": "2023-11-20T08:15:00.000+0000" }
                ]
            }
        }
    }"#;

    fn source() -> JsonFileSource {
        JsonFileSource::from_json(DATASET).unwrap()
    }

    fn fields() -> Vec<String> {
        ["Name", "Industry", "Phone", "CreatedDate"].iter().map(ToString::to_string).collect()
    }

    fn ids(records: &[RawRecord]) -> Vec<String> {
        records.iter().map(|r| field_text(r, "Id").unwrap_or_default()).collect()
    }

    #[test]
    fn base_expression_returns_every_record() {
        let records = source()
            .fetch_records("Account", &fields(), &FilterExpression::new("Id != NULL"))
            .unwrap();
        assert_eq!(ids(&records), vec!["001", "002", "003"]);
    }

    #[test]
    fn records_are_projected_to_requested_fields() {
        let records = source()
            .fetch_records("Account", &["Name".to_string()], &FilterExpression::new("Id != NULL"))
            .unwrap();
        let keys: Vec<&String> = records[0].keys().collect();
        assert_eq!(keys, vec!["Id", "Name"]);
    }

    #[test]
    fn relationship_fields_keep_nested_record() {
        let records = source()
            .fetch_records("Account", &["Owner.Name".to_string()], &FilterExpression::new("Id != NULL"))
            .unwrap();
        assert_eq!(field_text(&records[0], "Owner.Name").as_deref(), Some("Ada"));
    }

    #[test]
    fn like_clause_is_case_insensitive_substring() {
        let filter = FilterExpression::new("Id != NULL")
            .and(Clause::new("Name", Operator::Contains, "ACME"));
        let records = source().fetch_records("Account", &fields(), &filter).unwrap();
        assert_eq!(ids(&records), vec!["001"]);
    }

    #[test]
    fn equality_and_date_range_combine() {
        let filter = FilterExpression::new("Id != NULL")
            .and(Clause::new("CreatedDate", Operator::AtLeast, "2024-01-01"))
            .and(Clause::new("CreatedDate", Operator::AtMost, "2024-12-31"));
        let records = source().fetch_records("Account", &fields(), &filter).unwrap();
        assert_eq!(ids(&records), vec!["001", "002"]);

        let filter = filter.and(Clause::new("Industry", Operator::Equals, "retail"));
        let records = source().fetch_records("Account", &fields(), &filter).unwrap();
        assert_eq!(ids(&records), vec!["002"]);
    }

    #[test]
    fn quote_in_value_is_matched_literally() {
        let filter = FilterExpression::new("Id != NULL")
            .and(Clause::new("Industry", Operator::Equals, "x' OR Name != '"));
        let records = source().fetch_records("Account", &fields(), &filter).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn unknown_object_is_a_query_exception() {
        let err = source()
            .fetch_records("Contact", &fields(), &FilterExpression::new("Id != NULL"))
            .unwrap_err();
        assert_eq!(err.exception_type, QUERY_EXCEPTION);
        assert!(err.message.contains("Contact"));
    }

    #[test]
    fn metadata_follows_request_order() {
        let metadata = source()
            .fetch_field_metadata("Account", &fields(), &FilterExpression::new("Id != NULL"))
            .unwrap();
        let names: Vec<&str> = metadata.iter().map(|m| m.api_name.as_str()).collect();
        assert_eq!(names, vec!["Name", "Industry", "Phone", "CreatedDate"]);
        assert_eq!(metadata[2].display_type, "phone");
        assert_eq!(metadata[0].display_type, "text");
        assert_eq!(metadata[0].object_plural_name, "Accounts");
    }

    #[test]
    fn unknown_field_fails_metadata() {
        let err = source()
            .fetch_field_metadata("Account", &["Rating".to_string()], &FilterExpression::new("Id != NULL"))
            .unwrap_err();
        assert!(err.message.contains("Rating"));
    }

    #[test]
    fn loads_dataset_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();
        let source = JsonFileSource::from_path(file.path()).unwrap();
        assert!(source.object("Account").is_ok());
    }

    #[test]
    fn invalid_json_is_a_dataset_error() {
        let err = JsonFileSource::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SearchListError::Dataset(_)));
    }

    #[test]
    fn like_patterns() {
        assert!(like_matches("acme corp", "%corp"));
        assert!(like_matches("acme corp", "acme%"));
        assert!(like_matches("acme corp", "%me c%"));
        assert!(!like_matches("acme corp", "corp%"));
        assert!(like_matches("acme", "acme"));
        assert!(like_matches("acme", "%"));
        assert!(like_matches("", "%"));
        assert!(!like_matches("", "_"));
        assert!(!like_matches("acme corp", "%acme"));
        assert!(like_matches("acme", "a_me"));
        assert!(like_matches("acme corp", "%c_e%"));
        assert!(!like_matches("acme", "a_e"));
        assert!(!like_matches("acme", "acme_"));
    }

    #[test]
    fn underscore_in_free_text_matches_one_character() {
        let filter = FilterExpression::new("Id != NULL")
            .and(Clause::new("Name", Operator::Contains, "gl_bex"));
        let records = source().fetch_records("Account", &fields(), &filter).unwrap();
        assert_eq!(ids(&records), vec!["002"]);
    }
}
