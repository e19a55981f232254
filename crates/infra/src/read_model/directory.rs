use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use uuid::Uuid;

use dashboard_core::{DomainError, DomainResult};
use dashboard_invoicing::{
    CreateInvoice, Invoice, InvoiceId, InvoicePage, PageNumber, count_invoice_pages, query_invoices,
};
use dashboard_parties::{Customer, CustomerOption, list_customers_for_select};

use crate::seed::SeedData;

/// Immutable view of both collections at one point in time.
///
/// Every query runs against a single snapshot, so a concurrent insert can
/// never show up halfway through a render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub customers: Vec<Customer>,
    pub invoices: Vec<Invoice>,
}

impl Snapshot {
    pub fn new(customers: Vec<Customer>, invoices: Vec<Invoice>) -> Self {
        Self { customers, invoices }
    }

    pub fn query_invoices(&self, query: &str, page: PageNumber) -> InvoicePage {
        query_invoices(&self.invoices, &self.customers, query, page)
    }

    /// `(total_matches, total_pages)` for `query`.
    pub fn count_invoice_pages(&self, query: &str) -> (usize, usize) {
        count_invoice_pages(&self.invoices, &self.customers, query)
    }

    pub fn customer_options(&self) -> Vec<CustomerOption> {
        list_customers_for_select(&self.customers)
    }

    fn has_customer(&self, id: &dashboard_parties::CustomerId) -> bool {
        self.customers.iter().any(|c| &c.id == id)
    }
}

/// Dashboard data source.
pub trait DashboardDirectory: Send + Sync {
    /// Current snapshot; cheap to take and safe to hold across a request.
    fn snapshot(&self) -> Arc<Snapshot>;

    /// Validate and store a new invoice dated `today`.
    fn create_invoice(&self, cmd: &CreateInvoice, today: NaiveDate) -> DomainResult<Invoice>;
}

impl<S> DashboardDirectory for Arc<S>
where
    S: DashboardDirectory + ?Sized,
{
    fn snapshot(&self) -> Arc<Snapshot> {
        (**self).snapshot()
    }

    fn create_invoice(&self, cmd: &CreateInvoice, today: NaiveDate) -> DomainResult<Invoice> {
        (**self).create_invoice(cmd, today)
    }
}

/// In-memory copy-on-write directory for dev/tests.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    inner: RwLock<Arc<Snapshot>>,
}

impl InMemoryDirectory {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            inner: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Build from seed data, logging invoices that point at unknown customers.
    ///
    /// Such invoices are kept: search drops them on its own, and keeping them
    /// means a later customer import makes them visible.
    pub fn from_seed(seed: SeedData) -> Self {
        let snapshot = Snapshot::new(seed.customers, seed.invoices);

        let dangling = snapshot
            .invoices
            .iter()
            .filter(|i| !snapshot.has_customer(&i.customer_id))
            .count();
        if dangling > 0 {
            tracing::warn!(dangling, "seed invoices reference unknown customers; they will not be listed");
        }

        tracing::info!(
            customers = snapshot.customers.len(),
            invoices = snapshot.invoices.len(),
            "dashboard directory loaded"
        );

        Self::new(snapshot)
    }
}

impl DashboardDirectory for InMemoryDirectory {
    fn snapshot(&self) -> Arc<Snapshot> {
        match self.inner.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    fn create_invoice(&self, cmd: &CreateInvoice, today: NaiveDate) -> DomainResult<Invoice> {
        let id = InvoiceId::new(Uuid::now_v7().to_string());
        let invoice = Invoice::create(cmd, id, today)?;

        let mut guard = match self.inner.write() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };

        if !guard.has_customer(&invoice.customer_id) {
            return Err(DomainError::not_found(format!("customer {}", invoice.customer_id)));
        }

        let mut next = Snapshot::clone(&guard);
        next.invoices.push(invoice.clone());
        *guard = Arc::new(next);

        tracing::info!(invoice_id = %invoice.id, customer_id = %invoice.customer_id, "invoice created");
        Ok(invoice)
    }
}
