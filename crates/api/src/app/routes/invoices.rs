use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use dashboard_invoicing::CreateInvoice;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_invoices).post(create_invoice))
        .route("/pages", get(invoice_pages))
}

/// One page of the invoice table: `?query=` filters, `?page=` selects the window.
pub async fn list_invoices(
    Extension(services): Extension<Arc<AppServices>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> axum::response::Response {
    let params: dto::InvoiceSearchParams = pairs.into_iter().collect();
    let page = services.invoice_page(params.query(), params.page());
    (StatusCode::OK, Json(dto::invoice_page_to_json(page))).into_response()
}

/// Totals for the pagination control, without the rows.
pub async fn invoice_pages(
    Extension(services): Extension<Arc<AppServices>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> axum::response::Response {
    let params: dto::InvoiceSearchParams = pairs.into_iter().collect();
    let (total_matches, total_pages) = services.invoice_page_count(params.query());
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "total_matches": total_matches,
            "total_pages": total_pages,
        })),
    )
        .into_response()
}

pub async fn create_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateInvoiceRequest>,
) -> axum::response::Response {
    let cmd = CreateInvoice::from(body);

    let invoice = match services.create_invoice(&cmd) {
        Ok(i) => i,
        Err(e) => {
            tracing::debug!(error = %e, customer_id = %cmd.customer_id, "invoice rejected");
            return errors::domain_error_to_response(e);
        }
    };

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "id": invoice.id.as_str(),
            "date": invoice.date.format("%Y-%m-%d").to_string(),
        })),
    )
        .into_response()
}
