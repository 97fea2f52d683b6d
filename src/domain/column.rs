//! Field metadata and table column descriptors.

use super::record::{NAME_FIELD, RECORD_URL_FIELD};
use serde::{Deserialize, Serialize};

/// Field API names that never get a column of their own; the synthetic link
/// column already shows the record name.
const SKIPPED_FIELDS: [&str; 2] = ["NAME", "PUBLISHEDTITLE__C"];

/// Describes one field as reported by the metadata source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Key the field was requested under.
    pub key: String,

    /// Human-readable field label.
    pub label: String,

    /// Display type used to format the column (`text`, `phone`, `date`, ...).
    #[serde(rename = "displaytype", alias = "display_type")]
    pub display_type: String,

    /// API name of the field, used as the record key.
    #[serde(rename = "apiname", alias = "api_name")]
    pub api_name: String,

    /// Plural label of the object the field belongs to, e.g. `Accounts`.
    #[serde(rename = "objectPluralName", alias = "object_plural_name", default)]
    pub object_plural_name: String,
}

/// A table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub label: String,
    /// Record key whose value fills the column.
    pub field_name: String,
    pub display_type: String,
    pub sortable: bool,
    /// For `url` columns, the record key shown as the link text.
    pub link_label_field: Option<String>,
}

impl ColumnDescriptor {
    /// The synthetic first column: the record name linking to the record.
    #[must_use]
    pub fn record_link() -> Self {
        Self {
            label: "Name".to_string(),
            field_name: RECORD_URL_FIELD.to_string(),
            display_type: "url".to_string(),
            sortable: false,
            link_label_field: Some(NAME_FIELD.to_string()),
        }
    }

    /// Returns the record key whose value is displayed in this column.
    #[must_use]
    pub fn display_field(&self) -> &str {
        self.link_label_field.as_deref().unwrap_or(&self.field_name)
    }
}

/// Columns derived from field metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet {
    pub columns: Vec<ColumnDescriptor>,
    /// Plural object label reported by the last non-skipped field.
    pub object_plural_name: Option<String>,
}

/// Builds the column list for the table.
///
/// The record link column always comes first. Fields named `Name` or
/// `PublishedTitle__c` (case-insensitive) are skipped; every other field
/// becomes a sortable column in metadata order.
///
/// # Examples
///
/// ```
/// use searchlist::domain::column::{build_columns, FieldMetadata};
///
/// let metadata = vec![FieldMetadata {
///     key: "phone".into(),
///     label: "Phone".into(),
///     display_type: "phone".into(),
///     api_name: "Phone".into(),
///     object_plural_name: "Accounts".into(),
/// }];
/// let set = build_columns(&metadata);
/// assert_eq!(set.columns.len(), 2);
/// assert_eq!(set.object_plural_name.as_deref(), Some("Accounts"));
/// ```
#[must_use]
pub fn build_columns(metadata: &[FieldMetadata]) -> ColumnSet {
    let mut set = ColumnSet {
        columns: vec![ColumnDescriptor::record_link()],
        object_plural_name: None,
    };

    for field in metadata {
        let upper = field.api_name.to_uppercase();
        if SKIPPED_FIELDS.contains(&upper.as_str()) {
            continue;
        }

        set.columns.push(ColumnDescriptor {
            label: field.label.clone(),
            field_name: field.api_name.clone(),
            display_type: field.display_type.clone(),
            sortable: true,
            link_label_field: None,
        });
        set.object_plural_name = Some(field.object_plural_name.clone());
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(api_name: &str, plural: &str) -> FieldMetadata {
        FieldMetadata {
            key: api_name.to_lowercase(),
            label: api_name.to_string(),
            display_type: "text".to_string(),
            api_name: api_name.to_string(),
            object_plural_name: plural.to_string(),
        }
    }

    #[test]
    fn link_column_comes_first() {
        let set = build_columns(&[field("Industry", "Accounts")]);
        assert_eq!(set.columns[0], ColumnDescriptor::record_link());
        assert_eq!(set.columns[0].display_field(), "Name");
        assert!(!set.columns[0].sortable);
        assert_eq!(set.columns[1].field_name, "Industry");
        assert!(set.columns[1].sortable);
    }

    #[test]
    fn name_and_published_title_are_skipped_case_insensitively() {
        let set = build_columns(&[
            field("name", "Accounts"),
            field("Phone", "Accounts"),
            field("publishedTitle__C", "Accounts"),
        ]);
        let names: Vec<&str> = set.columns.iter().map(|c| c.field_name.as_str()).collect();
        assert_eq!(names, vec!["RecordURL", "Phone"]);
    }

    #[test]
    fn plural_name_comes_from_last_kept_field() {
        let set = build_columns(&[field("Phone", "Accounts"), field("Name", "Ignored")]);
        assert_eq!(set.object_plural_name.as_deref(), Some("Accounts"));
    }

    #[test]
    fn empty_metadata_keeps_only_link_column() {
        let set = build_columns(&[]);
        assert_eq!(set.columns.len(), 1);
        assert!(set.object_plural_name.is_none());
    }

    #[test]
    fn metadata_deserializes_backend_keys() {
        let json = r#"{"key":"industry","label":"Industry","displaytype":"picklist","apiname":"Industry","objectPluralName":"Accounts"}"#;
        let meta: FieldMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.display_type, "picklist");
        assert_eq!(meta.api_name, "Industry");
    }
}
