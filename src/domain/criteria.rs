//! Filter criteria and the structured filter expression.
//!
//! A [`FilterExpression`] is a trusted base condition (for example
//! `Id != NULL`) followed by zero or more user-supplied [`Clause`]s, each
//! AND-ed onto the base in the order they were added.
//!
//! The expression can be consumed two ways:
//!
//! - [`FilterExpression::bind`] produces a [`BoundQuery`]: the clause text
//!   uses `:p0`, `:p1`, ... placeholders and the user values travel separately
//!   as typed [`Param`]s. Sources should use this form.
//! - `Display` renders the values inline, without any escaping. A value such
//!   as `x' OR Name != '` changes the meaning of the rendered text, so the
//!   inline form must never be handed to a backend as a query. It exists for
//!   logging and for display.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison applied by a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Case-insensitive substring match (`LIKE '%value%'`).
    Contains,
    /// Equality (`= 'value'`).
    Equals,
    /// Lower bound, inclusive (`>= value`).
    AtLeast,
    /// Upper bound, inclusive (`<= value`).
    AtMost,
}

impl Operator {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Contains => "LIKE",
            Self::Equals => "=",
            Self::AtLeast => ">=",
            Self::AtMost => "<=",
        }
    }
}

/// A typed value bound to a query placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Param {
    Text(String),
    Date(NaiveDate),
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

/// One `AND <field> <operator> <value>` condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub field: String,
    pub operator: Operator,
    /// The value exactly as the user entered it.
    pub value: String,
}

impl Clause {
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Returns the typed parameter for this clause.
    ///
    /// `Contains` wraps the value in `%` wildcards. Range bounds are bound as
    /// dates when they parse as `YYYY-MM-DD` and as text otherwise.
    #[must_use]
    pub fn param(&self) -> Param {
        match self.operator {
            Operator::Contains => Param::Text(format!("%{}%", self.value)),
            Operator::Equals => Param::Text(self.value.clone()),
            Operator::AtLeast | Operator::AtMost => {
                NaiveDate::parse_from_str(&self.value, "%Y-%m-%d")
                    .map_or_else(|_| Param::Text(self.value.clone()), Param::Date)
            }
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.operator.symbol();
        match self.operator {
            Operator::Contains => write!(f, "{} {op} '%{}%'", self.field, self.value),
            Operator::Equals => write!(f, "{} {op} '{}'", self.field, self.value),
            Operator::AtLeast | Operator::AtMost => write!(f, "{} {op} {}", self.field, self.value),
        }
    }
}

/// Query text with placeholders plus the values bound to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundQuery {
    /// Condition text, e.g. `Id != NULL AND Name LIKE :p0`.
    pub text: String,
    /// Values for `:p0`, `:p1`, ... in order.
    pub params: Vec<Param>,
}

/// A base condition with user clauses AND-ed onto it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterExpression {
    base: String,
    clauses: Vec<Clause>,
}

impl FilterExpression {
    /// Creates an expression with only the base condition.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            clauses: Vec::new(),
        }
    }

    /// Appends a clause; clauses keep insertion order.
    #[must_use]
    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Builds the parameterized form of the expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchlist::domain::criteria::{Clause, FilterExpression, Operator, Param};
    ///
    /// let expr = FilterExpression::new("Id != NULL")
    ///     .and(Clause::new("Industry", Operator::Equals, "Energy"));
    /// let bound = expr.bind();
    /// assert_eq!(bound.text, "Id != NULL AND Industry = :p0");
    /// assert_eq!(bound.params, vec![Param::Text("Energy".to_string())]);
    /// ```
    #[must_use]
    pub fn bind(&self) -> BoundQuery {
        let mut text = self.base.clone();
        let mut params = Vec::with_capacity(self.clauses.len());

        for (index, clause) in self.clauses.iter().enumerate() {
            text.push_str(&format!(
                " AND {} {} :p{index}",
                clause.field,
                clause.operator.symbol()
            ));
            params.push(clause.param());
        }

        BoundQuery { text, params }
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        for clause in &self.clauses {
            write!(f, " AND {clause}")?;
        }
        Ok(())
    }
}

/// Everything the record table needs to run one search.
///
/// Built by the filter panel and treated as immutable once handed to the
/// table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// API name of the object to query, e.g. `Account`.
    pub object_name: String,
    /// Fields to fetch, in column order.
    pub field_list: Vec<String>,
    pub filter_expression: FilterExpression,
    /// Rows per page, always greater than zero.
    pub page_size: usize,
    /// Hides column sorting in the table.
    pub disable_sort: bool,
    /// Hides the table's own free-text search box.
    pub disable_search: bool,
}
