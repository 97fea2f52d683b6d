//! Record table state: fetched records and their filtered, sorted, paged views.
//!
//! The table keeps three views of the same records. `all` holds everything the
//! last successful search returned, `filtered` is the subset matching the
//! table's own free-text box (in the current sort order) and `page` is the
//! window of `filtered` currently shown. Records are shared through `Rc`, so
//! the views hold references into one set rather than copies.

use std::cmp::Reverse;
use std::rc::Rc;

use crate::app::message::PageMessage;
use crate::app::modes::SortDirection;
use crate::app::panel::SearchTrigger;
use crate::domain::{
    build_columns, flatten, ColumnDescriptor, FieldMetadata, FilterCriteria, FlatRecord,
    RawRecord, SearchListError, UpstreamError,
};
use crate::source::SourceRequest;

/// Minimum number of characters before the free-text box filters anything.
const MIN_FREE_TEXT_CHARS: usize = 2;

/// Derived view of the fetched records.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub all_records: Vec<Rc<FlatRecord>>,
    pub filtered_records: Vec<Rc<FlatRecord>>,
    pub page_records: Vec<Rc<FlatRecord>>,
    pub sort_field: Option<String>,
    pub sort_direction: SortDirection,
    pub search_text: String,
    /// Number of filtered records.
    pub record_count: usize,
    /// 1-based page number, 0 when there is nothing to show.
    pub current_page: usize,
    pub total_pages: usize,
    /// 1-based position of the first row on the page, 0 when empty.
    pub begin_index: usize,
    /// Exclusive end of the page window within `filtered_records`.
    pub end_index: usize,
    pub disable_back: bool,
    pub disable_forward: bool,
}

/// Fetch that produced the current error message.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Failure {
    Metadata(UpstreamError),
    Records(UpstreamError),
}

/// The record table.
#[derive(Debug, Clone)]
pub struct RecordTable {
    criteria: FilterCriteria,
    columns: Vec<ColumnDescriptor>,
    object_plural_name: Option<String>,
    view: ViewState,
    message: Option<PageMessage>,
    failure: Option<Failure>,
    has_records: bool,
    last_request_id: u64,
}

impl RecordTable {
    #[must_use]
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            columns: Vec::new(),
            object_plural_name: None,
            view: ViewState {
                disable_back: true,
                disable_forward: true,
                ..ViewState::default()
            },
            message: None,
            failure: None,
            has_records: false,
            last_request_id: 0,
        }
    }

    /// Request resolving the column metadata, issued once when the table mounts.
    #[must_use]
    pub fn mount(&self) -> SourceRequest {
        tracing::debug!(object_name = %self.criteria.object_name, "mounting record table");
        SourceRequest::fetch_field_metadata(
            self.criteria.object_name.clone(),
            self.criteria.field_list.clone(),
            self.criteria.filter_expression.clone(),
        )
    }

    /// Applies the result of the metadata fetch.
    pub fn on_field_metadata(&mut self, result: Result<Vec<FieldMetadata>, UpstreamError>) {
        match result {
            Ok(metadata) => {
                let set = build_columns(&metadata);
                tracing::debug!(columns = set.columns.len(), "columns built");
                self.columns = set.columns;
                if set.object_plural_name.is_some() {
                    self.object_plural_name = set.object_plural_name;
                }
                self.message = None;
                self.failure = None;
            }
            Err(error) => {
                tracing::warn!(error = %error, "field metadata fetch failed");
                self.columns.clear();
                self.clear_records();
                self.message = Some(PageMessage::error(&error));
                self.failure = Some(Failure::Metadata(error));
            }
        }
    }

    /// Applies the result of a record fetch.
    ///
    /// Returns `false` when the response belongs to a search that has since
    /// been superseded; such responses leave the table untouched.
    pub fn on_records_fetched(
        &mut self,
        request_id: u64,
        result: Result<Vec<RawRecord>, UpstreamError>,
    ) -> bool {
        if request_id != self.last_request_id {
            tracing::debug!(
                request_id = request_id,
                latest = self.last_request_id,
                "discarding stale record response"
            );
            return false;
        }

        match result {
            Ok(raw) => {
                let records: Vec<Rc<FlatRecord>> =
                    raw.into_iter().map(|record| Rc::new(flatten(record))).collect();
                tracing::debug!(request_id = request_id, count = records.len(), "records received");

                self.failure = None;
                self.view.search_text.clear();
                self.view.sort_field = None;
                self.view.sort_direction = SortDirection::default();

                if records.is_empty() {
                    self.clear_records();
                    self.message = Some(PageMessage::no_records());
                } else {
                    self.view.filtered_records = records.clone();
                    self.view.all_records = records;
                    self.has_records = true;
                    self.message = None;
                }
            }
            Err(error) => {
                tracing::warn!(request_id = request_id, error = %error, "record fetch failed");
                self.clear_records();
                self.message = Some(PageMessage::error(&error));
                self.failure = Some(Failure::Records(error));
            }
        }

        self.paginate(0);
        true
    }

    fn clear_records(&mut self) {
        self.view.all_records.clear();
        self.view.filtered_records.clear();
        self.view.page_records.clear();
        self.has_records = false;
        self.paginate(0);
    }

    /// Stable sort of the filtered records by the display string of `field`.
    pub fn sort_by(&mut self, field: &str, direction: SortDirection) {
        let _span = tracing::debug_span!("sort_by", field = %field, direction = %direction).entered();

        match direction {
            SortDirection::Ascending => self
                .view
                .filtered_records
                .sort_by_cached_key(|record| record.display(field).to_lowercase()),
            SortDirection::Descending => self
                .view
                .filtered_records
                .sort_by_cached_key(|record| Reverse(record.display(field).to_lowercase())),
        }

        self.view.sort_field = Some(field.to_string());
        self.view.sort_direction = direction;
        self.paginate(0);
    }

    /// Narrows the filtered records to those with any field containing `text`.
    ///
    /// Fewer than two characters restores every record.
    pub fn apply_free_text_filter(&mut self, text: &str) {
        self.view.search_text = text.to_string();

        if text.chars().count() >= MIN_FREE_TEXT_CHARS {
            let needle = text.to_lowercase();
            self.view.filtered_records = self
                .view
                .all_records
                .iter()
                .filter(|record| record.any_field_contains(&needle))
                .cloned()
                .collect();
        } else {
            self.view.filtered_records = self.view.all_records.clone();
        }

        tracing::debug!(
            text = %text,
            matched = self.view.filtered_records.len(),
            "free-text filter applied"
        );
        self.paginate(0);
    }

    /// Shows the page window starting at `start` (0-based).
    ///
    /// A start past the end of the filtered records shows the last page.
    pub fn paginate(&mut self, start: usize) {
        let page_size = self.page_size();
        let count = self.view.filtered_records.len();
        let view = &mut self.view;

        if count == 0 {
            view.record_count = 0;
            view.total_pages = 0;
            view.current_page = 0;
            view.begin_index = 0;
            view.end_index = 0;
            view.page_records.clear();
            view.disable_back = true;
            view.disable_forward = true;
            return;
        }

        let total_pages = count.div_ceil(page_size);
        let start = start.min((total_pages - 1) * page_size);
        let end = start.saturating_add(page_size).min(count);

        view.record_count = count;
        view.total_pages = total_pages;
        view.begin_index = start + 1;
        view.end_index = end;
        view.current_page = start / page_size + 1;
        view.page_records = view.filtered_records[start..end].to_vec();
        view.disable_back = view.begin_index < page_size;
        view.disable_forward = view.current_page == view.total_pages;

        tracing::trace!(
            start = start,
            end = end,
            page = view.current_page,
            total_pages = total_pages,
            "paginated"
        );
    }

    pub fn first(&mut self) {
        self.paginate(0);
    }

    pub fn previous(&mut self) {
        let start = self.view.begin_index.saturating_sub(self.page_size() + 1);
        self.paginate(start);
    }

    pub fn next(&mut self) {
        let start = self
            .view
            .begin_index
            .saturating_add(self.page_size())
            .saturating_sub(1);
        self.paginate(start);
    }

    pub fn last(&mut self) {
        let start = self.view.total_pages.saturating_sub(1) * self.page_size();
        self.paginate(start);
    }

    fn page_size(&self) -> usize {
        self.criteria.page_size.max(1)
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    #[must_use]
    pub fn object_plural_name(&self) -> Option<&str> {
        self.object_plural_name.as_deref()
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn message(&self) -> Option<&PageMessage> {
        self.message.as_ref()
    }

    /// The fetch failure behind the current error message, if any.
    #[must_use]
    pub fn failure(&self) -> Option<SearchListError> {
        self.failure.as_ref().map(|failure| match failure {
            Failure::Metadata(error) => SearchListError::MetadataFetch(error.clone()),
            Failure::Records(error) => SearchListError::RecordFetch(error.clone()),
        })
    }

    #[must_use]
    pub const fn has_records(&self) -> bool {
        self.has_records
    }

    /// Sequence token of the newest record request.
    #[must_use]
    pub const fn last_request_id(&self) -> u64 {
        self.last_request_id
    }

    #[must_use]
    pub const fn sort_enabled(&self) -> bool {
        !self.criteria.disable_sort
    }

    #[must_use]
    pub const fn search_enabled(&self) -> bool {
        !self.criteria.disable_search
    }
}

impl SearchTrigger for RecordTable {
    type Outcome = SourceRequest;

    /// Adopts `criteria` and issues a record request tagged with a fresh
    /// sequence token.
    fn search(&mut self, criteria: FilterCriteria) -> SourceRequest {
        self.last_request_id += 1;
        self.criteria = criteria;

        tracing::info!(
            request_id = self.last_request_id,
            object_name = %self.criteria.object_name,
            filter = %self.criteria.filter_expression.bind().text,
            "searching records"
        );

        SourceRequest::fetch_records(
            self.last_request_id,
            self.criteria.object_name.clone(),
            self.criteria.field_list.clone(),
            self.criteria.filter_expression.clone(),
        )
    }
}
