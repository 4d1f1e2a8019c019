//! HTML rendering of delivery schedules and purchase orders.
//!
//! Each document type has an embedded Tera template; the document becomes
//! the template context via serde, and the display rows come from the
//! shared layout so the table matches the PDF output cell for cell.
//! Pagination is left to the browser's print engine.

use tera::{Context, Tera};

use crate::error::{DocError, Result};
use crate::layout::{format_amount, invoice_rows, schedule_rows_from_items};
use crate::model::{DeliverySchedule, PurchaseOrder};

const SCHEDULE_TEMPLATE: &str = include_str!("templates/delivery_schedule.html.tera");
const ORDER_TEMPLATE: &str = include_str!("templates/purchase_order.html.tera");

fn render(template_name: &str, template_content: &str, context: &Context) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)?;
    Ok(tera.render(template_name, context)?)
}

/// Renders a delivery schedule as a self-contained printable HTML page.
pub fn render_delivery_schedule_html(schedule: &DeliverySchedule) -> Result<String> {
    let value = serde_json::to_value(schedule).map_err(|e| DocError::Template(e.to_string()))?;
    let mut context = Context::from_value(value)?;
    context.insert("rows", &schedule_rows_from_items(&schedule.items));
    render("delivery_schedule.html", SCHEDULE_TEMPLATE, &context)
}

/// Renders a purchase-order invoice as a self-contained printable HTML page.
pub fn render_purchase_order_html(order: &PurchaseOrder) -> Result<String> {
    let value = serde_json::to_value(order).map_err(|e| DocError::Template(e.to_string()))?;
    let mut context = Context::from_value(value)?;
    context.insert("rows", &invoice_rows(&order.items));
    context.insert("igst_rate_fmt", &format!("{}", order.igst_rate));
    context.insert("subtotal_fmt", &format_amount(Some(order.subtotal)));
    context.insert("igst_amount_fmt", &format_amount(Some(order.igst_amount)));
    context.insert("advance_fmt", &format_amount(Some(order.advance)));
    context.insert("total_amount_fmt", &format_amount(Some(order.total_amount)));
    render("purchase_order.html", ORDER_TEMPLATE, &context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{sample_delivery_schedule, sample_purchase_order};

    #[test]
    fn schedule_html_contains_grouped_table() {
        let html = render_delivery_schedule_html(&sample_delivery_schedule()).unwrap();
        assert!(html.contains("Delivery Schedule"));
        assert!(html.contains("Item Wise Delivery Schedule:"));
        // Three display rows: 1 + continuation + 2.
        assert_eq!(html.matches("<tr class=\"item").count(), 3);
        // Continuation row shows only date and quantity; Tera escapes the
        // slashes in interpolated values.
        assert!(html.contains("10&#x2F;3&#x2F;25"));
        assert!(html.contains("M/s: Dealberg Technologies Pvt Ltd"));
    }

    #[test]
    fn schedule_html_escapes_markup_in_fields() {
        let mut schedule = sample_delivery_schedule();
        schedule.company_name = "<script>alert(1)</script>".into();
        let html = render_delivery_schedule_html(&schedule).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn purchase_order_html_formats_amounts() {
        let html = render_purchase_order_html(&sample_purchase_order()).unwrap();
        assert!(html.contains("Purchase Order"));
        assert!(html.contains("16.50"));
        assert!(html.contains("33000.00"));
        assert!(html.contains("-10000.00"));
        assert!(html.contains("IGST @ 18%"));
    }
}
