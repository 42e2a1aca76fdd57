use itertools::Itertools;

use crate::sigtable::{matches, parse, FunctionSignature, Matcher};

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Returns the signatures matching the raw query, in their original order.
pub fn apply<'a>(records: &'a [FunctionSignature], raw_query: &str) -> Vec<&'a FunctionSignature> {
    let query = parse(raw_query);
    log::trace!("filtering {} signatures by {:?} parsed as '{}'", records.len(), raw_query, query);

    records.iter()
        .filter(|sig| matches(&query, sig))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Number of pages needed for `rows` rows. Zero rows need zero pages.
    pub fn page_count(&self, rows: usize) -> usize {
        rows.div_ceil(self.page_size)
    }

    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next_page(&self, rows: usize) -> bool {
        self.page_index + 1 < self.page_count(rows)
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next_page(&mut self, rows: usize) {
        if self.can_next_page(rows) {
            self.page_index += 1;
        }
    }

    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    /// The slice of `rows` on the current page, empty if the page is out of range.
    pub fn page<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = (self.page_index * self.page_size).min(rows.len());
        let end = (start + self.page_size).min(rows.len());
        &rows[start..end]
    }
}

/// The state behind the table: all signatures, the current query and the visible subset.
pub struct FunctionTable {
    all: Vec<FunctionSignature>,
    visible: Vec<FunctionSignature>,
    query: String,
    pagination: Pagination,
    matcher: Box<dyn Matcher>,
}

impl FunctionTable {
    pub fn new(all: Vec<FunctionSignature>, matcher: Box<dyn Matcher>, page_size: usize) -> Self {
        let visible = all.clone();

        Self {
            all,
            visible,
            query: String::new(),
            pagination: Pagination::new(page_size),
            matcher,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible(&self) -> &[FunctionSignature] {
        &self.visible
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.update_visible();
    }

    pub fn set_records(&mut self, records: Vec<FunctionSignature>) {
        self.all = records;
        self.update_visible();
    }

    fn update_visible(&mut self) {
        let visible_new = self.matcher
            .matches(&self.query, &self.all)
            .into_iter()
            .cloned()
            .collect_vec();

        log::debug!("query {:?} matches {} of {} signatures", self.query, visible_new.len(), self.all.len());

        // never leave the user on a page that no longer exists
        if visible_new != self.visible {
            self.pagination.first_page();
        }

        self.visible = visible_new;
    }

    pub fn page_rows(&self) -> &[FunctionSignature] {
        self.pagination.page(&self.visible)
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.visible.len())
    }

    pub fn can_previous_page(&self) -> bool {
        self.pagination.can_previous_page()
    }

    pub fn can_next_page(&self) -> bool {
        self.pagination.can_next_page(self.visible.len())
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous_page();
    }

    pub fn next_page(&mut self) {
        self.pagination.next_page(self.visible.len());
    }
}
