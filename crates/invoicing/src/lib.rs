//! Invoicing domain module.
//!
//! Invoices, the invoice search (join + substring filter), the pager and the
//! display helpers used by the invoice table, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod format;
pub mod invoice;
pub mod pager;
pub mod query;

pub use format::{format_currency, format_date};
pub use invoice::{CreateInvoice, Invoice, InvoiceId, InvoiceStatus};
pub use pager::{
    ITEMS_PER_PAGE, InvoicePage, PageMarker, PageNumber, count_invoice_pages, count_pages,
    page_markers, paginate, query_invoices, sort_by_date_desc,
};
pub use query::{InvoiceWithCustomer, count_matches, search};
