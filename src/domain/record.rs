//! Record shapes returned by record sources and their flattened projection.
//!
//! Sources return [`RawRecord`]s: field names mapped to either a scalar or a
//! nested record (a lookup relationship such as `Owner`). The table only works
//! with [`FlatRecord`]s, produced by [`flatten`], where every nested child is
//! lifted to the top level under a `parent_child` key and a `RecordURL` link
//! is derived from the record `Id`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Field holding the record identifier.
pub const ID_FIELD: &str = "Id";

/// Field holding the record display name.
pub const NAME_FIELD: &str = "Name";

/// Derived field holding the relative link to the record.
pub const RECORD_URL_FIELD: &str = "RecordURL";

/// A single scalar field value.
///
/// Numbers keep their original JSON representation so that `10` and `10.0`
/// display the way the backend sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    /// Returns `true` for [`Scalar::Null`] and empty text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A raw field value: either a scalar or a nested record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(Scalar),
    Record(BTreeMap<String, Value>),
}

impl Value {
    /// Collapses the value into a scalar.
    ///
    /// Nested records below the first level are not flattened further; they
    /// become their compact JSON text.
    fn into_scalar(self) -> Scalar {
        match self {
            Self::Scalar(s) => s,
            Self::Record(map) => {
                Scalar::Text(serde_json::to_string(&map).unwrap_or_default())
            }
        }
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Scalar(value.into())
    }
}

/// A record as returned by a source, keyed by field name.
pub type RawRecord = BTreeMap<String, Value>;

/// A one-level-flattened record ready for display, search and sorting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatRecord {
    fields: BTreeMap<String, Scalar>,
}

impl FlatRecord {
    /// Returns the value stored under `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Scalar> {
        self.fields.get(field)
    }

    /// Returns the display string of `field`; missing fields display as `""`.
    #[must_use]
    pub fn display(&self, field: &str) -> String {
        self.fields.get(field).map(ToString::to_string).unwrap_or_default()
    }

    /// Returns `true` if any field's display string contains `needle_lower`.
    ///
    /// `needle_lower` must already be lowercased.
    #[must_use]
    pub fn any_field_contains(&self, needle_lower: &str) -> bool {
        self.fields.values().any(|value| {
            let text = value.to_string();
            !text.is_empty() && text.to_lowercase().contains(needle_lower)
        })
    }

    fn insert(&mut self, field: String, value: Scalar) {
        self.fields.insert(field, value);
    }
}

/// Flattens a raw record one level deep and derives its `RecordURL`.
///
/// Scalars keep their field name. Every child of a nested record is stored
/// under `parent_child`. Top-level scalars are written first and nested
/// children second, so a nested child overwrites a scalar that happens to have
/// the same flattened name; between two nested parents the one later in key
/// order wins.
///
/// `RecordURL` is always `"/" + Id`, with a missing `Id` treated as empty.
///
/// # Examples
///
/// ```
/// use searchlist::domain::record::{flatten, RawRecord, Value};
/// use std::collections::BTreeMap;
///
/// let mut owner = BTreeMap::new();
/// owner.insert("Name".to_string(), Value::from("Ada"));
///
/// let mut raw = RawRecord::new();
/// raw.insert("Id".to_string(), Value::from("001"));
/// raw.insert("Owner".to_string(), Value::Record(owner));
///
/// let flat = flatten(raw);
/// assert_eq!(flat.display("Owner_Name"), "Ada");
/// assert_eq!(flat.display("RecordURL"), "/001");
/// ```
#[must_use]
pub fn flatten(raw: RawRecord) -> FlatRecord {
    let mut flat = FlatRecord::default();
    let mut nested = Vec::new();

    for (key, value) in raw {
        match value {
            Value::Scalar(scalar) => flat.insert(key, scalar),
            Value::Record(children) => nested.push((key, children)),
        }
    }

    for (parent, children) in nested {
        for (child, value) in children {
            flat.insert(format!("{parent}_{child}"), value.into_scalar());
        }
    }

    let url = format!("/{}", flat.display(ID_FIELD));
    flat.insert(RECORD_URL_FIELD.to_string(), Scalar::Text(url));
    flat
}
