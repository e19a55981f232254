//! Invoice search: join each invoice to its customer and filter by free text.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use dashboard_core::Entity;
use dashboard_parties::{Customer, CustomerId};

use crate::invoice::{Invoice, InvoiceId, InvoiceStatus};

/// Invoice joined with its customer, as shown in the invoice table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceWithCustomer {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    pub amount: u64,
    pub date: NaiveDate,
    pub status: InvoiceStatus,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

impl InvoiceWithCustomer {
    fn join(invoice: &Invoice, customer: &Customer) -> Self {
        Self {
            id: invoice.id.clone(),
            customer_id: invoice.customer_id.clone(),
            amount: invoice.amount,
            date: invoice.date,
            status: invoice.status,
            name: customer.name.clone(),
            email: customer.email.clone(),
            image_url: customer.image_url.clone(),
        }
    }
}

/// Invoices whose customer resolves and whose text fields contain `query`.
///
/// Matching is case-insensitive and tests, in order: customer name, customer
/// email, the amount's decimal digits, the `YYYY-MM-DD` date and the status.
/// The amount is matched as text, so `"100"` also hits `1004` and `21005`.
/// An empty query keeps every resolvable invoice. Invoices pointing at an
/// unknown customer are dropped silently. Input order is preserved.
pub fn search(invoices: &[Invoice], customers: &[Customer], query: &str) -> Vec<InvoiceWithCustomer> {
    joined_matches(invoices, customers, query)
        .map(|(invoice, customer)| InvoiceWithCustomer::join(invoice, customer))
        .collect()
}

/// Number of invoices [`search`] would return, without building the rows.
pub fn count_matches(invoices: &[Invoice], customers: &[Customer], query: &str) -> usize {
    joined_matches(invoices, customers, query).count()
}

fn joined_matches<'a>(
    invoices: &'a [Invoice],
    customers: &'a [Customer],
    query: &str,
) -> impl Iterator<Item = (&'a Invoice, &'a Customer)> {
    let needle = query.to_lowercase();
    let by_id: HashMap<&CustomerId, &Customer> = customers.iter().map(|c| (c.id(), c)).collect();

    invoices.iter().filter_map(move |invoice| {
        let customer = *by_id.get(&invoice.customer_id)?;
        matches(invoice, customer, &needle).then_some((invoice, customer))
    })
}

fn matches(invoice: &Invoice, customer: &Customer, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    customer.name.to_lowercase().contains(needle)
        || customer.email.to_lowercase().contains(needle)
        || invoice.amount.to_string().contains(needle)
        || invoice.date.format("%Y-%m-%d").to_string().contains(needle)
        || invoice.status.as_str().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn invoice(id: &str, customer_id: &str, amount: u64, date: NaiveDate, status: InvoiceStatus) -> Invoice {
        Invoice {
            id: InvoiceId::new(id),
            customer_id: CustomerId::new(customer_id),
            amount,
            date,
            status,
        }
    }

    fn alice() -> Customer {
        Customer::new("c1", "Alice", "a@x.com", "/customers/alice.png")
    }

    fn bob() -> Customer {
        Customer::new("c2", "Bob Ñúñez", "bob@example.org", "/customers/bob.png")
    }

    fn ids(rows: &[InvoiceWithCustomer]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn single_invoice_scenario() {
        let invoices = vec![invoice("1", "c1", 1500, date(2023, 5, 1), InvoiceStatus::Paid)];
        let customers = vec![alice()];

        let hits = search(&invoices, &customers, "alice");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Alice");
        assert_eq!(hits[0].id.as_str(), "1");
        assert_eq!(hits[0].email, "a@x.com");
        assert_eq!(hits[0].image_url, "/customers/alice.png");

        assert!(search(&invoices, &customers, "999").is_empty());
    }

    #[test]
    fn empty_query_keeps_resolvable_invoices_in_order() {
        let invoices = vec![
            invoice("3", "c2", 10, date(2022, 1, 1), InvoiceStatus::Pending),
            invoice("1", "missing", 20, date(2023, 1, 1), InvoiceStatus::Paid),
            invoice("2", "c1", 30, date(2021, 1, 1), InvoiceStatus::Paid),
        ];
        let customers = vec![alice(), bob()];

        let hits = search(&invoices, &customers, "");

        assert_eq!(ids(&hits), vec!["3", "2"]);
        assert_eq!(count_matches(&invoices, &customers, ""), 2);
    }

    #[test]
    fn query_is_case_insensitive_across_fields() {
        let invoices = vec![
            invoice("1", "c1", 1500, date(2023, 5, 1), InvoiceStatus::Paid),
            invoice("2", "c2", 777, date(2022, 11, 14), InvoiceStatus::Pending),
        ];
        let customers = vec![alice(), bob()];

        assert_eq!(ids(&search(&invoices, &customers, "ALICE")), vec!["1"]);
        assert_eq!(ids(&search(&invoices, &customers, "EXAMPLE.ORG")), vec!["2"]);
        assert_eq!(ids(&search(&invoices, &customers, "ñúñ")), vec!["2"]);
        assert_eq!(ids(&search(&invoices, &customers, "Pending")), vec!["2"]);
        assert_eq!(ids(&search(&invoices, &customers, "2022-11")), vec!["2"]);
        assert_eq!(ids(&search(&invoices, &customers, "-05-")), vec!["1"]);
    }

    #[test]
    fn amount_matches_as_text_not_as_number() {
        let invoices = vec![
            invoice("1", "c1", 1004, date(2023, 1, 1), InvoiceStatus::Paid),
            invoice("2", "c1", 21005, date(2023, 1, 2), InvoiceStatus::Paid),
            invoice("3", "c1", 99, date(2023, 1, 3), InvoiceStatus::Paid),
        ];
        let customers = vec![alice()];

        assert_eq!(ids(&search(&invoices, &customers, "100")), vec!["1", "2"]);
    }

    #[test]
    fn unknown_customer_is_never_returned() {
        let invoices = vec![invoice("1", "ghost", 1500, date(2023, 5, 1), InvoiceStatus::Paid)];

        assert!(search(&invoices, &[alice()], "paid").is_empty());
        assert!(search(&invoices, &[], "").is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_invoices() -> impl Strategy<Value = Vec<Invoice>> {
            proptest::collection::vec(
                (0u8..4, 0u64..100_000, 0i64..3_000, any::<bool>()),
                0..30,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (cust, amount, day, paid))| {
                        let status = if paid { InvoiceStatus::Paid } else { InvoiceStatus::Pending };
                        let when = date(2018, 1, 1) + chrono::Duration::days(day);
                        invoice(&format!("inv-{i}"), &format!("c{cust}"), amount, when, status)
                    })
                    .collect()
            })
        }

        fn customers() -> Vec<Customer> {
            // c3 intentionally absent
            vec![
                Customer::new("c0", "Delba de Oliveira", "delba@oliveira.com", "/d.png"),
                Customer::new("c1", "Lee Robinson", "lee@robinson.com", "/l.png"),
                Customer::new("c2", "Amy Burrell", "amy@burrell.com", "/a.png"),
            ]
        }

        proptest! {
            /// Property: the empty query returns exactly the resolvable invoices, in order.
            #[test]
            fn empty_query_is_the_join(invoices in arb_invoices()) {
                let customers = customers();
                let hits = search(&invoices, &customers, "");

                let expected: Vec<&str> = invoices
                    .iter()
                    .filter(|i| i.customer_id.as_str() != "c3")
                    .map(|i| i.id.as_str())
                    .collect();
                prop_assert_eq!(ids(&hits), expected);
            }

            /// Property: every hit contains the query in at least one searchable field.
            #[test]
            fn every_hit_contains_query(invoices in arb_invoices(), query in "[a-zA-Z0-9@.-]{1,4}") {
                let customers = customers();
                let needle = query.to_lowercase();

                for row in search(&invoices, &customers, &query) {
                    let hit = row.name.to_lowercase().contains(&needle)
                        || row.email.to_lowercase().contains(&needle)
                        || row.amount.to_string().contains(&needle)
                        || row.date.to_string().contains(&needle)
                        || row.status.as_str().contains(&needle);
                    prop_assert!(hit, "row {:?} does not contain {:?}", row, query);
                }
            }

            /// Property: count_matches agrees with search.
            #[test]
            fn count_agrees_with_search(invoices in arb_invoices(), query in "[a-z0-9]{0,3}") {
                let customers = customers();
                prop_assert_eq!(
                    count_matches(&invoices, &customers, &query),
                    search(&invoices, &customers, &query).len()
                );
            }
        }
    }
}
