use std::collections::HashMap;

use axum::{
    extract::{Json, Multipart},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

use docukit::render::pdf::{render_delivery_schedule, render_purchase_order};
use docukit::sample::sample_delivery_schedule;
use docukit::{Attachment, DeliverySchedule, DocError, InvoiceItem, LineItem, PurchaseOrder};

/// Standard error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message describing what went wrong
    pub error: String,
}

/// Application-specific error types for the API
#[derive(Debug)]
pub enum AppError {
    /// Malformed client input (bad multipart body, unparseable items JSON)
    BadRequest(String),
    /// Render-time failures from the document library
    Doc(DocError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_msg) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Doc(e @ DocError::InvalidItems(_)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Doc(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        let error_response = ErrorResponse { error: error_msg };

        (status, Json(error_response)).into_response()
    }
}

impl From<DocError> for AppError {
    fn from(err: DocError) -> Self {
        AppError::Doc(err)
    }
}

/// Build the application router with all routes configured
pub fn app() -> Router {
    Router::new()
        .route(
            "/api/delivery-schedule/generate",
            post(generate_delivery_schedule),
        )
        .route(
            "/api/delivery-schedule/preview",
            get(preview_delivery_schedule),
        )
        .route("/api/purchase-order/generate", post(generate_purchase_order))
        .route("/api/health", get(health_check))
        .layer(CorsLayer::permissive())
}

/// Text fields and file attachments pulled out of one multipart upload.
struct UploadForm {
    fields: HashMap<String, String>,
    items: Option<String>,
    logo: Option<Vec<u8>>,
    signature: Option<Vec<u8>>,
}

impl UploadForm {
    fn take(&mut self, name: &str) -> String {
        self.fields.remove(name).unwrap_or_default()
    }

    fn take_f64(&mut self, name: &str) -> f64 {
        self.take(name).trim().parse().unwrap_or(0.0)
    }
}

async fn read_form(multipart: &mut Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm {
        fields: HashMap::new(),
        items: None,
        logo: None,
        signature: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read multipart field: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "logo" => {
                let data = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read logo data: {e}"))
                })?;
                form.logo = Some(data.to_vec());
            }
            "signature" => {
                let data = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read signature data: {e}"))
                })?;
                form.signature = Some(data.to_vec());
            }
            "items" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read items field: {e}"))
                })?;
                form.items = Some(text);
            }
            "" => continue,
            _ => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read field '{name}': {e}"))
                })?;
                form.fields.insert(name, text);
            }
        }
    }

    Ok(form)
}

fn schedule_from_form(mut form: UploadForm) -> Result<DeliverySchedule, AppError> {
    let items: Vec<LineItem> =
        serde_json::from_str(form.items.as_deref().unwrap_or("[]")).map_err(DocError::InvalidItems)?;

    Ok(DeliverySchedule {
        company_name: form.take("companyName"),
        company_address: form.take("companyAddress"),
        po_no: form.take("poNo"),
        po_date: form.take("poDate"),
        delivery_type: form.take("deliveryType"),
        payment_terms: form.take("paymentTerms"),
        gstin: form.take("gstin"),
        pan_no: form.take("panNo"),
        client_name: form.take("clientName"),
        client_address: form.take("clientAddress"),
        client_gstin: form.take("clientGstin"),
        shipped_to: form.take("shippedTo"),
        items,
        contact_details: form.take("contactDetails"),
        terms_and_conditions: form.take("termsAndConditions"),
        logo: form.logo.map(Attachment::new),
        signature: form.signature.map(Attachment::new),
    })
}

fn order_from_form(mut form: UploadForm) -> Result<PurchaseOrder, AppError> {
    let items: Vec<InvoiceItem> =
        serde_json::from_str(form.items.as_deref().unwrap_or("[]")).map_err(DocError::InvalidItems)?;

    Ok(PurchaseOrder {
        company_name: form.take("companyName"),
        company_address: form.take("companyAddress"),
        po_no: form.take("poNo"),
        po_date: form.take("poDate"),
        ref_no: form.take("refNo"),
        gstin: form.take("gstin"),
        pan_no: form.take("panNo"),
        client_name: form.take("clientName"),
        client_address: form.take("clientAddress"),
        client_gstin: form.take("clientGstin"),
        shipped_to: form.take("shippedTo"),
        delivery_date: form.take("deliveryDate"),
        payment_terms: form.take("paymentTerms"),
        items,
        subtotal: form.take_f64("subtotal"),
        igst_rate: form.take_f64("igstRate"),
        igst_amount: form.take_f64("igstAmount"),
        advance: form.take_f64("advance"),
        total_amount: form.take_f64("totalAmount"),
        contact_details: form.take("contactDetails"),
        email_details: form.take("emailDetails"),
        logo: form.logo.map(Attachment::new),
        signature: form.signature.map(Attachment::new),
    })
}

fn pdf_response(pdf: Vec<u8>, disposition: String) -> Response {
    (
        StatusCode::OK,
        [
            ("Content-Type", "application/pdf".to_string()),
            ("Content-Disposition", disposition),
        ],
        pdf,
    )
        .into_response()
}

/// Generate a delivery-schedule PDF from an uploaded multipart form
pub async fn generate_delivery_schedule(mut multipart: Multipart) -> Result<Response, AppError> {
    let form = read_form(&mut multipart).await?;
    let schedule = schedule_from_form(form)?;

    info!(po_no = %schedule.po_no, items = schedule.items.len(), "generating delivery schedule");
    let pdf = render_delivery_schedule(&schedule)?;

    Ok(pdf_response(
        pdf,
        format!("attachment; filename=delivery-schedule-{}.pdf", schedule.po_no),
    ))
}

/// Generate a purchase-order PDF from an uploaded multipart form
pub async fn generate_purchase_order(mut multipart: Multipart) -> Result<Response, AppError> {
    let form = read_form(&mut multipart).await?;
    let order = order_from_form(form)?;

    info!(po_no = %order.po_no, items = order.items.len(), "generating purchase order");
    let pdf = render_purchase_order(&order)?;

    Ok(pdf_response(
        pdf,
        format!("attachment; filename=purchase-order-{}.pdf", order.po_no),
    ))
}

/// Render the built-in sample schedule for preview without uploading data
pub async fn preview_delivery_schedule() -> Result<Response, AppError> {
    let pdf = render_delivery_schedule(&sample_delivery_schedule())?;

    Ok(pdf_response(
        pdf,
        "inline; filename=delivery-schedule-preview.pdf".to_string(),
    ))
}

/// Health check endpoint for monitoring and load balancing
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "docukit API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
