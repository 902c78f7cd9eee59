//! Split the root sequence into pages at page-break markers

use serde::Serialize;

use crate::model::Element;

/// Pages of root elements; page breaks are consumed as separators.
///
/// Only the root sequence is considered: page breaks nested in a group never
/// start a page. A trailing empty page is dropped and at least one page (maybe
/// empty) is always returned.
pub fn paginate(roots: &[Element]) -> Vec<Vec<&Element>> {
    let mut pages: Vec<Vec<&Element>> = Vec::new();
    for element in roots {
        if element.is_page_break() {
            pages.push(Vec::new());
        } else if let Some(page) = pages.last_mut() {
            page.push(element);
        } else {
            pages.push(vec![element]);
        }
    }

    if pages.last().is_some_and(|page| page.is_empty()) {
        pages.pop();
    }
    if pages.is_empty() {
        pages.push(Vec::new());
    }
    pages
}

pub fn page_count(roots: &[Element]) -> usize {
    paginate(roots).len()
}

/// Multi-step navigation over the pages of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Pager {
    current: usize,
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current page index, clamped to the available pages
    pub fn current(&self, page_count: usize) -> usize {
        self.current.min(page_count.saturating_sub(1))
    }

    pub fn go_to(&mut self, page: usize, page_count: usize) {
        self.current = page.min(page_count.saturating_sub(1));
    }

    pub fn next(&mut self, page_count: usize) {
        let current = self.current(page_count);
        self.go_to(current + 1, page_count);
    }

    pub fn previous(&mut self, page_count: usize) {
        let current = self.current(page_count);
        self.current = current.saturating_sub(1);
    }

    pub fn has_next(&self, page_count: usize) -> bool {
        self.current(page_count) + 1 < page_count
    }

    pub fn has_previous(&self, page_count: usize) -> bool {
        self.current(page_count) > 0
    }

    /// "Step n of N"
    pub fn progress_label(&self, page_count: usize) -> String {
        format!("Step {} of {}", self.current(page_count) + 1, page_count.max(1))
    }

    /// Share of the form reached, as a percentage
    pub fn progress_percent(&self, page_count: usize) -> f64 {
        let pages = page_count.max(1) as f64;
        (self.current(page_count) + 1) as f64 / pages * 100.0
    }
}
