//! Filter panel state.
//!
//! The [`FilterPanel`] owns the raw filter inputs and composes them into the
//! [`FilterCriteria`] handed to the record table. It never talks to the table
//! directly: searches go through a [`SearchTrigger`] passed in by the caller.

use crate::app::modes::FilterField;
use crate::domain::{Clause, FilterCriteria, FilterExpression, Operator};

/// Field matched by the free-text input.
const FREE_TEXT_FIELD: &str = "Name";

/// Field matched by the category selector.
const CATEGORY_FIELD: &str = "Industry";

/// Field bounded by the date range inputs.
const DATE_FIELD: &str = "CreatedDate";

/// Capability to start a record search.
///
/// Implemented by the record table; the filter panel only ever sees this
/// trait, so any component that can run a search may be plugged in.
pub trait SearchTrigger {
    /// What starting a search produces, e.g. an outbound request.
    type Outcome;

    fn search(&mut self, criteria: FilterCriteria) -> Self::Outcome;
}

/// Values the panel starts with and returns to on reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelDefaults {
    pub object_name: String,
    pub field_list: Vec<String>,
    /// Trusted base condition every expression starts from.
    pub base_filter: String,
    pub page_size: usize,
    pub disable_sort: bool,
    pub disable_search: bool,
    pub category_options: Vec<String>,
}

impl Default for PanelDefaults {
    fn default() -> Self {
        Self {
            object_name: "Account".to_string(),
            field_list: ["Name", "Industry", "Phone", "CreatedDate"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            base_filter: "Id != NULL".to_string(),
            page_size: 200,
            disable_sort: true,
            disable_search: true,
            category_options: ["Consulting", "Retail", "Energy"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Filter inputs and the expression derived from them.
#[derive(Debug, Clone)]
pub struct FilterPanel {
    defaults: PanelDefaults,
    search_text: String,
    category: String,
    from_date: String,
    to_date: String,
    filter_expression: FilterExpression,
    show_table: bool,
}

impl FilterPanel {
    #[must_use]
    pub fn new(defaults: PanelDefaults) -> Self {
        let filter_expression = FilterExpression::new(defaults.base_filter.clone());
        Self {
            defaults,
            search_text: String::new(),
            category: String::new(),
            from_date: String::new(),
            to_date: String::new(),
            filter_expression,
            show_table: true,
        }
    }

    /// Clears every input, restores the default criteria and starts a search.
    pub fn reset_filters<T: SearchTrigger + ?Sized>(&mut self, trigger: &mut T) -> T::Outcome {
        tracing::debug!("resetting filters");

        self.search_text.clear();
        self.category.clear();
        self.from_date.clear();
        self.to_date.clear();
        self.filter_expression = FilterExpression::new(self.defaults.base_filter.clone());
        self.show_table = true;

        self.trigger_search(trigger)
    }

    /// Stores a new input value and recomputes the filter expression.
    pub fn on_field_changed(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        tracing::trace!(field = ?field, value = %value, "filter input changed");

        match field {
            FilterField::FreeText => self.search_text = value,
            FilterField::Category => self.category = value,
            FilterField::FromDate => self.from_date = value,
            FilterField::ToDate => self.to_date = value,
        }

        self.filter_expression = self.compose_expression();
        tracing::debug!(filter = %self.filter_expression, "filter expression recomputed");
    }

    /// Builds the expression from the base filter and every non-empty input,
    /// always in free text, category, from date, to date order.
    fn compose_expression(&self) -> FilterExpression {
        let inputs = [
            (&self.search_text, FREE_TEXT_FIELD, Operator::Contains),
            (&self.category, CATEGORY_FIELD, Operator::Equals),
            (&self.from_date, DATE_FIELD, Operator::AtLeast),
            (&self.to_date, DATE_FIELD, Operator::AtMost),
        ];

        inputs
            .into_iter()
            .filter(|(value, _, _)| !value.is_empty())
            .fold(
                FilterExpression::new(self.defaults.base_filter.clone()),
                |expr, (value, field, operator)| expr.and(Clause::new(field, operator, value.as_str())),
            )
    }

    /// Hands the current criteria to `trigger`.
    pub fn trigger_search<T: SearchTrigger + ?Sized>(&mut self, trigger: &mut T) -> T::Outcome {
        self.show_table = true;
        let criteria = self.criteria();
        tracing::debug!(
            object_name = %criteria.object_name,
            filter = %criteria.filter_expression,
            "search triggered"
        );
        trigger.search(criteria)
    }

    /// Snapshot of the criteria the next search will use.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            object_name: self.defaults.object_name.clone(),
            field_list: self.defaults.field_list.clone(),
            filter_expression: self.filter_expression.clone(),
            page_size: self.defaults.page_size.max(1),
            disable_sort: self.defaults.disable_sort,
            disable_search: self.defaults.disable_search,
        }
    }

    #[must_use]
    pub fn filter_expression(&self) -> &FilterExpression {
        &self.filter_expression
    }

    /// Returns the current raw value of an input.
    #[must_use]
    pub fn value(&self, field: FilterField) -> &str {
        match field {
            FilterField::FreeText => &self.search_text,
            FilterField::Category => &self.category,
            FilterField::FromDate => &self.from_date,
            FilterField::ToDate => &self.to_date,
        }
    }

    /// Options offered by the category selector.
    #[must_use]
    pub fn category_options(&self) -> &[String] {
        &self.defaults.category_options
    }

    #[must_use]
    pub const fn show_table(&self) -> bool {
        self.show_table
    }
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::new(PanelDefaults::default())
    }
}
