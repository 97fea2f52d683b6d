//! Application state management and view model computation.
//!
//! [`AppState`] composes the filter panel and the record table. The panel
//! reaches the table only through the [`SearchTrigger`](crate::app::panel::SearchTrigger)
//! capability passed in by the event handler.

use crate::app::panel::{FilterPanel, PanelDefaults};
use crate::app::table::RecordTable;
use crate::app::modes::FilterField;
use crate::domain::{ColumnDescriptor, FlatRecord};
use crate::ui::viewmodel::{
    CellItem, ColumnHeader, FilterInfo, HeaderInfo, MessageBanner, PagerInfo, RowItem,
    SearchBarInfo, TableViewModel,
};

/// Display type marking a column whose cells link to a record.
const URL_DISPLAY_TYPE: &str = "url";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    pub panel: FilterPanel,
    pub table: RecordTable,
}

impl AppState {
    /// Creates the panel from `defaults` and a table seeded with the panel's
    /// initial criteria.
    #[must_use]
    pub fn new(defaults: PanelDefaults) -> Self {
        let panel = FilterPanel::new(defaults);
        let table = RecordTable::new(panel.criteria());
        Self { panel, table }
    }

    /// Transforms the current state into a renderable view model.
    ///
    /// A page message replaces the table body and pager entirely.
    #[must_use]
    pub fn compute_viewmodel(&self) -> TableViewModel {
        let view = self.table.view();

        let message = self.table.message().map(|message| MessageBanner {
            title: message.title.clone(),
            summary: message.summary.clone(),
            icon: message.icon.clone(),
            is_error: message.is_error(),
        });

        let (rows, pager) = if message.is_some() {
            (Vec::new(), None)
        } else {
            let rows = view
                .page_records
                .iter()
                .map(|record| self.compute_row(record))
                .collect();
            let pager = self.table.has_records().then(|| PagerInfo {
                begin_index: view.begin_index,
                end_index: view.end_index,
                record_count: view.record_count,
                current_page: view.current_page,
                total_pages: view.total_pages,
                back_enabled: !view.disable_back,
                forward_enabled: !view.disable_forward,
            });
            (rows, pager)
        };

        TableViewModel {
            header: self.compute_header(),
            filters: self.compute_filters(),
            search_bar: self.table.search_enabled().then(|| SearchBarInfo {
                query: view.search_text.clone(),
            }),
            columns: self.compute_columns(),
            rows,
            pager,
            message,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let name = self
            .table
            .object_plural_name()
            .unwrap_or(self.table.criteria().object_name.as_str());
        HeaderInfo {
            title: format!("{name} ({})", self.table.view().record_count),
        }
    }

    fn compute_filters(&self) -> FilterInfo {
        FilterInfo {
            search_text: self.panel.value(FilterField::FreeText).to_string(),
            category: self.panel.value(FilterField::Category).to_string(),
            from_date: self.panel.value(FilterField::FromDate).to_string(),
            to_date: self.panel.value(FilterField::ToDate).to_string(),
            category_options: self.panel.category_options().to_vec(),
        }
    }

    fn compute_columns(&self) -> Vec<ColumnHeader> {
        let view = self.table.view();
        self.table
            .columns()
            .iter()
            .map(|column| ColumnHeader {
                label: column.label.clone(),
                sortable: column.sortable && self.table.sort_enabled(),
                sorted: (view.sort_field.as_deref() == Some(column.field_name.as_str()))
                    .then_some(view.sort_direction),
            })
            .collect()
    }

    fn compute_row(&self, record: &FlatRecord) -> RowItem {
        RowItem {
            cells: self
                .table
                .columns()
                .iter()
                .map(|column| Self::compute_cell(column, record))
                .collect(),
        }
    }

    fn compute_cell(column: &ColumnDescriptor, record: &FlatRecord) -> CellItem {
        CellItem {
            text: record.display(column.display_field()),
            link: (column.display_type == URL_DISPLAY_TYPE)
                .then(|| record.display(&column.field_name)),
        }
    }
}
