use serde::Deserialize;

use dashboard_invoicing::{
    CreateInvoice, InvoicePage, InvoiceWithCustomer, PageMarker, PageNumber, format_currency,
    format_date, page_markers,
};
use dashboard_parties::CustomerOption;

// -------------------------
// Request DTOs
// -------------------------

/// `?query=&page=` on the invoice list. Both are optional and untrusted.
///
/// Built from the raw query pairs rather than deserialized, so repeated or
/// unknown keys never reject the request: the first value of each key wins.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InvoiceSearchParams {
    pub query: Option<String>,
    pub page: Option<String>,
}

impl FromIterator<(String, String)> for InvoiceSearchParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "query" => &mut params.query,
                "page" => &mut params.page,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

impl InvoiceSearchParams {
    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }

    pub fn page(&self) -> PageNumber {
        PageNumber::parse(self.page.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    pub customer_id: String,
    /// Amount in cents.
    pub amount: u64,
    pub status: String,
}

impl From<CreateInvoiceRequest> for CreateInvoice {
    fn from(body: CreateInvoiceRequest) -> Self {
        CreateInvoice {
            customer_id: body.customer_id,
            amount: body.amount,
            status: body.status,
        }
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn invoice_row_to_json(row: InvoiceWithCustomer) -> serde_json::Value {
    serde_json::json!({
        "id": row.id.as_str(),
        "customer_id": row.customer_id.as_str(),
        "name": row.name,
        "email": row.email,
        "image_url": row.image_url,
        "amount": row.amount,
        "amount_display": format_currency(row.amount),
        "date": row.date.format("%Y-%m-%d").to_string(),
        "date_display": format_date(row.date),
        "status": row.status.as_str(),
    })
}

pub fn page_marker_to_json(marker: PageMarker) -> serde_json::Value {
    match marker {
        PageMarker::Page(n) => serde_json::json!(n),
        PageMarker::Ellipsis => serde_json::json!("..."),
    }
}

pub fn invoice_page_to_json(page: InvoicePage) -> serde_json::Value {
    let pages = page_markers(page.current_page.get(), page.total_pages)
        .into_iter()
        .map(page_marker_to_json)
        .collect::<Vec<_>>();
    let items = page
        .items
        .into_iter()
        .map(invoice_row_to_json)
        .collect::<Vec<_>>();

    serde_json::json!({
        "items": items,
        "current_page": page.current_page.get(),
        "total_pages": page.total_pages,
        "total_matches": page.total_matches,
        "pages": pages,
    })
}

pub fn customer_option_to_json(option: CustomerOption) -> serde_json::Value {
    serde_json::json!({
        "id": option.id.as_str(),
        "name": option.name,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use dashboard_invoicing::{InvoiceId, InvoiceStatus};
    use dashboard_parties::CustomerId;

    use super::*;

    #[test]
    fn search_params_default_when_missing_or_bad() {
        let params = InvoiceSearchParams::default();
        assert_eq!(params.query(), "");
        assert_eq!(params.page(), PageNumber::FIRST);

        let params = InvoiceSearchParams {
            query: Some("Lee".to_string()),
            page: Some("two".to_string()),
        };
        assert_eq!(params.query(), "Lee");
        assert_eq!(params.page(), PageNumber::FIRST);
    }

    #[test]
    fn search_params_take_the_first_of_repeated_keys() {
        let pairs = [
            ("page", "1"),
            ("query", "a"),
            ("sort", "date"),
            ("page", "2"),
            ("query", "b"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()));

        let params: InvoiceSearchParams = pairs.into_iter().collect();

        assert_eq!(params.query(), "a");
        assert_eq!(params.page(), PageNumber::FIRST);
        assert_eq!(InvoiceSearchParams::from_iter(Vec::new()), InvoiceSearchParams::default());
    }

    #[test]
    fn row_json_carries_raw_and_display_fields() {
        let row = InvoiceWithCustomer {
            id: InvoiceId::new("i1"),
            customer_id: CustomerId::new("c1"),
            amount: 15795,
            date: NaiveDate::from_ymd_opt(2022, 12, 6).unwrap(),
            status: InvoiceStatus::Pending,
            name: "Delba de Oliveira".to_string(),
            email: "delba@oliveira.com".to_string(),
            image_url: "/customers/delba-de-oliveira.png".to_string(),
        };

        let json = invoice_row_to_json(row);

        assert_eq!(json["id"], "i1");
        assert_eq!(json["amount"], 15795);
        assert_eq!(json["amount_display"], "$157.95");
        assert_eq!(json["date"], "2022-12-06");
        assert_eq!(json["date_display"], "Dec 6, 2022");
        assert_eq!(json["status"], "pending");
    }

    #[test]
    fn markers_serialize_as_numbers_and_ellipsis() {
        assert_eq!(page_marker_to_json(PageMarker::Page(4)), serde_json::json!(4));
        assert_eq!(page_marker_to_json(PageMarker::Ellipsis), serde_json::json!("..."));
    }
}
