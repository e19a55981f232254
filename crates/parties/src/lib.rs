//! Parties domain module (customers).
//!
//! Customer records and the customer listing used by the invoice form,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod customer;

pub use customer::{Customer, CustomerId, CustomerOption, collation_key, list_customers_for_select};
