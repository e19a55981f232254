use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use dashboard_core::{Entity, impl_string_id};

/// Customer identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl_string_id!(CustomerId, "CustomerId");

/// A customer who can be billed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    /// Avatar reference (path or URL), passed through untouched.
    pub image_url: String,
}

impl Customer {
    pub fn new(
        id: impl Into<CustomerId>,
        name: impl Into<String>,
        email: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            image_url: image_url.into(),
        }
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// `{id, name}` projection used to populate the customer selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOption {
    pub id: CustomerId,
    pub name: String,
}

impl From<&Customer> for CustomerOption {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
        }
    }
}

/// Collation key for a display name.
///
/// Names are transliterated to ASCII and lower-cased, so `"Ángel"` files next
/// to `"Angel"` and `"amy"` next to `"Amy"`, rather than after `"Zed"` as a
/// raw code-point comparison would have it.
pub fn collation_key(name: &str) -> String {
    deunicode::deunicode(name).to_lowercase()
}

/// All customers as `{id, name}` pairs, ascending by collated name.
///
/// Equal collation keys put unaccented before accented (`"Angel"`, `"Ángel"`),
/// then lowercase before uppercase (`"amy"`, `"Amy"`), then keep input order.
/// The input slice is left untouched.
///
/// Punctuation is compared by its ASCII value, so a leading `"~"` sorts after
/// the letters. Locale-aware collators weigh symbols differently; this is a
/// known difference for names that start with one.
pub fn list_customers_for_select(customers: &[Customer]) -> Vec<CustomerOption> {
    let mut keyed: Vec<(String, &Customer)> = customers
        .iter()
        .map(|c| (collation_key(&c.name), c))
        .collect();

    keyed.sort_by(|(ka, a), (kb, b)| ka.cmp(kb).then_with(|| tie_break(&a.name, &b.name)));

    keyed.into_iter().map(|(_, c)| CustomerOption::from(c)).collect()
}

fn tie_break(a: &str, b: &str) -> Ordering {
    // Only case differs past the first comparison; lowercase has the larger
    // code point, hence the flip.
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
