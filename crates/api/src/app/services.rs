use std::sync::Arc;

use chrono::Utc;

use dashboard_core::DomainResult;
use dashboard_infra::DashboardDirectory;
use dashboard_invoicing::{CreateInvoice, Invoice, InvoicePage, PageNumber};
use dashboard_parties::CustomerOption;

/// Handles shared by every request handler.
///
/// Each read takes one snapshot from the directory and answers from it, so a
/// render never mixes data from before and after a concurrent insert.
pub struct AppServices {
    directory: Arc<dyn DashboardDirectory>,
}

impl AppServices {
    pub fn new(directory: Arc<dyn DashboardDirectory>) -> Self {
        Self { directory }
    }

    pub fn invoice_page(&self, query: &str, page: PageNumber) -> InvoicePage {
        let result = self.directory.snapshot().query_invoices(query, page);
        tracing::debug!(
            query,
            page = page.get(),
            total_matches = result.total_matches,
            returned = result.items.len(),
            "invoice search"
        );
        result
    }

    /// `(total_matches, total_pages)` for `query`.
    pub fn invoice_page_count(&self, query: &str) -> (usize, usize) {
        let counts = self.directory.snapshot().count_invoice_pages(query);
        tracing::debug!(query, total_matches = counts.0, total_pages = counts.1, "invoice page count");
        counts
    }

    pub fn customer_options(&self) -> Vec<CustomerOption> {
        self.directory.snapshot().customer_options()
    }

    /// Create an invoice dated today (UTC).
    pub fn create_invoice(&self, cmd: &CreateInvoice) -> DomainResult<Invoice> {
        let today = Utc::now().date_naive();
        self.directory.create_invoice(cmd, today)
    }
}
