//! Built-in sample documents, used by the preview endpoint, the CLI demo
//! commands, and tests.

use crate::model::{DeliverySchedule, InvoiceItem, LineItem, PurchaseOrder};

/// A delivery schedule with one article split across two dates and a
/// second article delivered in full.
///
/// Article 1 is intentionally short-scheduled (300 of the declared 400),
/// mirroring the documented sample values, so this fixture does NOT pass
/// reconciliation as-is.
pub fn sample_delivery_schedule() -> DeliverySchedule {
    DeliverySchedule {
        company_name: "Company Name".into(),
        company_address: "Plot No. 70, B-Block, Ground Floor, Lions Enclave,\nVikas Nagar, Uttam Nagar, New Delhi-110059".into(),
        po_no: "224".into(),
        po_date: "25/07/2024".into(),
        delivery_type: "Multiple".into(),
        payment_terms: "x days".into(),
        gstin: "07APJPK9045B1ZY".into(),
        pan_no: "07APJPK9045B".into(),
        client_name: "M/s: Dealberg Technologies Pvt Ltd".into(),
        client_address: "2751, 31st main road\nPWD Quarters 1st Sector HSR Layout, Bangalore,\nKarnataka 560102 India".into(),
        client_gstin: "29AAFCD7015E1ZT".into(),
        shipped_to: "VOI JEANS RETAIL INDIA PVT LTD SF/ 43/44/45 D3/4/A-3/10/11 1 ST PHASE DODDABALLAPURA INDUSTRIAL AREA, KASABA HOBLI BANGALORE NOTH TALUK, DODDABALLAPURA, Bangalore 561203 Karnataka India".into(),
        items: vec![
            LineItem {
                id: 1,
                particulars: "HDPE Bags\nSize - 30\"x45\"".into(),
                total_quantity: "400".into(),
                delivery_date: "2/3/25".into(),
                quantity_to_delivery: "100".into(),
            },
            LineItem {
                id: 1,
                particulars: "HDPE Bags\nSize - 30\"x45\"".into(),
                total_quantity: "400".into(),
                delivery_date: "10/3/25".into(),
                quantity_to_delivery: "200".into(),
            },
            LineItem {
                id: 2,
                particulars: "HDPE Bags\nSize - 23\"x45\"".into(),
                total_quantity: "100".into(),
                delivery_date: "2/3/25".into(),
                quantity_to_delivery: "100".into(),
            },
        ],
        contact_details: "Mob: +919205279117, +919810676451".into(),
        terms_and_conditions: "Delivery as per the item wise schedule above; quantities short-shipped on a date roll over to the next scheduled date.".into(),
        logo: None,
        signature: None,
    }
}

/// A single-line purchase order with IGST and an advance adjustment.
pub fn sample_purchase_order() -> PurchaseOrder {
    PurchaseOrder {
        company_name: "Company Name".into(),
        company_address: "Plot No. 70, B-Block, Ground Floor, Lions Enclave, Vikas Nagar, Uttam Nagar, New Delhi-110059".into(),
        po_no: "2247".into(),
        po_date: "25/07/2024".into(),
        ref_no: "2247".into(),
        gstin: "07APJPK9045B1ZY".into(),
        pan_no: "07APJPK9045B".into(),
        client_name: "M/s: Dealberg Technologies Pvt Ltd".into(),
        client_address: "2751, 31st main road PWD Quarters 1st Sector HSR Layout, Bangalore, Karnataka 560102 India".into(),
        client_gstin: "29AAFCD7015E1ZT".into(),
        shipped_to: "VOI JEANS RETAIL INDIA PVT LTD SF/ 43/44/45 D3/4/A-3/10/11 1 ST PHASE DODDABALLAPURA INDUSTRIAL AREA, KASABA HOBLI BANGALORE NOTH TALUK, DODDABALLAPURA, Bangalore 561203 Karnataka India".into(),
        delivery_date: "31/07/24 or Multiple".into(),
        payment_terms: "x days".into(),
        items: vec![InvoiceItem {
            id: 1,
            particulars: "HDPE Bags\nSize - 30\"x45\"".into(),
            hsn_code: "3923".into(),
            quantity: "2000\nunits".into(),
            rate: Some(16.50),
            amount: Some(33000.0),
        }],
        subtotal: 33000.0,
        igst_rate: 18.0,
        igst_amount: 5940.0,
        advance: -10000.0,
        total_amount: 28940.0,
        contact_details: "Mob: +919205279117, +919810676451".into(),
        email_details: "Email: contact@motherbags.in".into(),
        logo: None,
        signature: None,
    }
}
