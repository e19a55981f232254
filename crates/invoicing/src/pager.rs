//! Pagination of search results: date ordering, fixed-size windows, page
//! numbers and the marker list for the pagination control.

use std::cmp::Ordering;

use serde::Serialize;

use dashboard_parties::Customer;

use crate::invoice::Invoice;
use crate::query::{InvoiceWithCustomer, count_matches, search};

/// Rows per page in the invoice table.
pub const ITEMS_PER_PAGE: usize = 5;

/// 1-based page number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PageNumber(usize);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    /// `None` for page zero.
    pub fn new(page: usize) -> Option<Self> {
        (page >= 1).then_some(Self(page))
    }

    /// Parse an optional, untrusted page parameter.
    ///
    /// Anything that is not a positive integer (absent, empty, `"abc"`,
    /// `"0"`, `"-2"`, `"1.5"`) becomes page 1.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<usize>().ok())
            .and_then(Self::new)
            .unwrap_or(Self::FIRST)
    }

    pub fn get(self) -> usize {
        self.0
    }

    fn offset(self, page_size: usize) -> usize {
        (self.0 - 1).saturating_mul(page_size)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Stable sort, newest first. Rows sharing a date keep their relative order.
pub fn sort_by_date_desc(rows: &mut [InvoiceWithCustomer]) {
    rows.sort_by(|a, b| newest_first(a, b));
}

fn newest_first(a: &InvoiceWithCustomer, b: &InvoiceWithCustomer) -> Ordering {
    b.date.cmp(&a.date)
}

/// One page of `matched`, newest first.
///
/// Only references are sorted; just the rows inside the window are cloned.
/// A page past the end is empty. A `page_size` of zero is treated as one.
pub fn paginate(
    matched: &[InvoiceWithCustomer],
    page: PageNumber,
    page_size: usize,
) -> Vec<InvoiceWithCustomer> {
    let page_size = page_size.max(1);

    let mut ordered: Vec<&InvoiceWithCustomer> = matched.iter().collect();
    ordered.sort_by(|a, b| newest_first(a, b));

    ordered
        .into_iter()
        .skip(page.offset(page_size))
        .take(page_size)
        .cloned()
        .collect()
}

/// `ceil(total / page_size)`, never less than 1.
///
/// The floor keeps the pagination control stable when nothing matches;
/// callers that need to tell "no results" apart should look at the match
/// count itself.
pub fn count_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Result of one invoice-table render: the visible rows plus paging totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoicePage {
    pub items: Vec<InvoiceWithCustomer>,
    pub current_page: PageNumber,
    pub total_pages: usize,
    pub total_matches: usize,
}

/// Search, sort and slice in one pass over the snapshot.
pub fn query_invoices(
    invoices: &[Invoice],
    customers: &[Customer],
    query: &str,
    page: PageNumber,
) -> InvoicePage {
    let matched = search(invoices, customers, query);
    let total_matches = matched.len();
    let items = paginate(&matched, page, ITEMS_PER_PAGE);

    InvoicePage {
        items,
        current_page: page,
        total_pages: count_pages(total_matches, ITEMS_PER_PAGE),
        total_matches,
    }
}

/// Page count for `query` without materialising any rows.
pub fn count_invoice_pages(invoices: &[Invoice], customers: &[Customer], query: &str) -> (usize, usize) {
    let total = count_matches(invoices, customers, query);
    (total, count_pages(total, ITEMS_PER_PAGE))
}

/// Entry in the pagination control.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Page links to render for `current` out of `total` pages.
///
/// Up to seven pages are all listed; beyond that the first and last pages
/// stay visible and gaps collapse into an ellipsis around the current page.
pub fn page_markers(current: usize, total: usize) -> Vec<PageMarker> {
    use PageMarker::{Ellipsis, Page};

    if total <= 7 {
        return (1..=total).map(Page).collect();
    }

    if current <= 3 {
        return vec![Page(1), Page(2), Page(3), Ellipsis, Page(total - 1), Page(total)];
    }

    if current >= total - 2 {
        return vec![Page(1), Page(2), Ellipsis, Page(total - 2), Page(total - 1), Page(total)];
    }

    vec![
        Page(1),
        Ellipsis,
        Page(current - 1),
        Page(current),
        Page(current + 1),
        Ellipsis,
        Page(total),
    ]
}
