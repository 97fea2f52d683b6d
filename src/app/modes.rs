//! Small enums describing user choices.
//!
//! - [`SortDirection`]: ordering requested for a column sort
//! - [`FilterField`]: the filter panel input that changed

use std::fmt;
use std::str::FromStr;

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(format!("unknown sort direction '{other}', expected asc or desc")),
        }
    }
}

/// Filter panel inputs, in the order their clauses are appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// Free text matched against the record name.
    FreeText,
    /// Category picked from the configured options.
    Category,
    /// Inclusive lower bound on the created date.
    FromDate,
    /// Inclusive upper bound on the created date.
    ToDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_direction_parses_short_and_long_forms() {
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Ascending));
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Descending));
        assert_eq!("descending".parse::<SortDirection>(), Ok(SortDirection::Descending));
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn default_direction_is_ascending() {
        assert_eq!(SortDirection::default().to_string(), "asc");
    }
}
