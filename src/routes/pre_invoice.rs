use crate::{
    dto::pre_invoice_dto::CreatePreInvoicePayload,
    error::{Error, Result},
    utils::time,
    AppState,
};
use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};

fn fetch_error(e: Error) -> Error {
    tracing::error!(error = ?e, "Pre-invoice store operation failed");
    Error::Internal(format!("Error fetching data - {}", e.detail()))
}

#[axum::debug_handler]
pub async fn list_pre_invoices(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let invoices = state
        .pre_invoice_service
        .list()
        .await
        .map_err(fetch_error)?;
    Ok(Json(invoices))
}

/// The body is parsed as JSON whatever `Content-Type` the caller sends.
#[axum::debug_handler]
pub async fn create_pre_invoice(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let payload: CreatePreInvoicePayload = serde_json::from_slice(&body)
        .map_err(|e| Error::BadRequest(format!("Invalid JSON body: {}", e)))?;

    let invoice = state
        .pre_invoice_service
        .create(payload, time::now())
        .await
        .map_err(fetch_error)?;

    tracing::info!(pre_invoice_id = invoice.id, "Pre-invoice created");
    Ok((StatusCode::CREATED, Json(invoice)))
}
