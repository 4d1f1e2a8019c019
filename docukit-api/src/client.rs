//! HTTP client helper mirroring the server's multipart contract.
//!
//! Callers hand over a document snapshot and an API base URL (for example
//! `http://localhost:3000/api`) and get back raw PDF bytes, or an error
//! carrying the non-success status.

use reqwest::multipart::{Form, Part};
use thiserror::Error;

use docukit::DeliverySchedule;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to encode items: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}

/// Posts a delivery schedule to a docukit API server and returns the PDF.
pub async fn generate_delivery_schedule(
    schedule: &DeliverySchedule,
    api_base_url: &str,
) -> Result<Vec<u8>, ClientError> {
    let mut form = Form::new()
        .text("companyName", schedule.company_name.clone())
        .text("companyAddress", schedule.company_address.clone())
        .text("poNo", schedule.po_no.clone())
        .text("poDate", schedule.po_date.clone())
        .text("deliveryType", schedule.delivery_type.clone())
        .text("paymentTerms", schedule.payment_terms.clone())
        .text("gstin", schedule.gstin.clone())
        .text("panNo", schedule.pan_no.clone())
        .text("clientName", schedule.client_name.clone())
        .text("clientAddress", schedule.client_address.clone())
        .text("clientGstin", schedule.client_gstin.clone())
        .text("shippedTo", schedule.shipped_to.clone())
        .text("contactDetails", schedule.contact_details.clone())
        .text("termsAndConditions", schedule.terms_and_conditions.clone())
        .text("items", serde_json::to_string(&schedule.items)?);

    if let Some(logo) = &schedule.logo {
        form = form.part(
            "logo",
            Part::bytes(logo.data.clone())
                .file_name("logo.jpg")
                .mime_str("image/jpeg")?,
        );
    }
    if let Some(signature) = &schedule.signature {
        form = form.part(
            "signature",
            Part::bytes(signature.data.clone())
                .file_name("signature.jpg")
                .mime_str("image/jpeg")?,
        );
    }

    let url = format!(
        "{}/delivery-schedule/generate",
        api_base_url.trim_end_matches('/')
    );
    let response = reqwest::Client::new()
        .post(url)
        .multipart(form)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ClientError::Status(response.status()));
    }

    Ok(response.bytes().await?.to_vec())
}
