//! Document types consumed by the renderers.
//!
//! Wire names are camelCase to match the upload format used by existing
//! clients, so the structs deserialize directly from the `items` form field
//! and from document JSON files.

use serde::{Deserialize, Serialize};

/// One delivery record for an article on a given date.
///
/// The `id` is not unique: an article ordered once but delivered across
/// several dates appears as several LineItems sharing an id. `particulars`
/// may embed newlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: i64,
    pub particulars: String,
    pub total_quantity: String,
    pub delivery_date: String,
    pub quantity_to_delivery: String,
}

/// All LineItems sharing an article id, in input order.
///
/// Built by [`crate::group::group_items`]; always holds at least one item.
/// `particulars` and `total_quantity` for the group are taken from the
/// first item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemGroup {
    pub id: i64,
    pub items: Vec<LineItem>,
}

impl ItemGroup {
    /// The item whose particulars and total quantity represent the group.
    pub fn first(&self) -> &LineItem {
        &self.items[0]
    }
}

/// An uploaded logo or signature image, supplied once per render and not
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub data: Vec<u8>,
}

impl Attachment {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

/// A multi-date delivery schedule document.
///
/// Header fields are opaque strings; addresses may embed newlines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverySchedule {
    pub company_name: String,
    pub company_address: String,
    pub po_no: String,
    pub po_date: String,
    pub delivery_type: String,
    pub payment_terms: String,
    pub gstin: String,
    pub pan_no: String,
    pub client_name: String,
    pub client_address: String,
    pub client_gstin: String,
    pub shipped_to: String,
    pub items: Vec<LineItem>,
    pub contact_details: String,
    pub terms_and_conditions: String,
    #[serde(skip)]
    pub logo: Option<Attachment>,
    #[serde(skip)]
    pub signature: Option<Attachment>,
}

/// One priced line of a purchase order.
///
/// `rate` and `amount` may be absent; renderers show missing values as
/// `"0.00"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub id: i64,
    pub particulars: String,
    pub hsn_code: String,
    pub quantity: String,
    pub rate: Option<f64>,
    pub amount: Option<f64>,
}

/// A purchase-order invoice document with priced items and totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub company_name: String,
    pub company_address: String,
    pub po_no: String,
    pub po_date: String,
    pub ref_no: String,
    pub gstin: String,
    pub pan_no: String,
    pub client_name: String,
    pub client_address: String,
    pub client_gstin: String,
    pub shipped_to: String,
    pub delivery_date: String,
    pub payment_terms: String,
    pub items: Vec<InvoiceItem>,
    pub subtotal: f64,
    pub igst_rate: f64,
    pub igst_amount: f64,
    pub advance: f64,
    pub total_amount: f64,
    pub contact_details: String,
    pub email_details: String,
    #[serde(skip)]
    pub logo: Option<Attachment>,
    #[serde(skip)]
    pub signature: Option<Attachment>,
}
