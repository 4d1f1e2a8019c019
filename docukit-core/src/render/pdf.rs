//! PDF rendering of delivery schedules and purchase orders.
//!
//! Drawing goes through the `oxidize-pdf` generation API: one `Document`,
//! one `Page` per output page, text via `TextContext`, fills and rules via
//! `GraphicsContext`, JPEG attachments via `Image`. Positions below are
//! top-down offsets (as the layout module defines them) and are flipped
//! into PDF user space at draw time.

use oxidize_pdf::{measure_text, Color, Document, Font, Image, Page};
use tracing::warn;

use crate::error::Result;
use crate::layout::{
    format_amount, invoice_rows, schedule_rows_from_items, InvoiceRow, Paginator, ScheduleRow,
    BAND_RGB, CONTINUATION_TOP, MARGIN, PAGE_BREAK_AT, PAGE_HEIGHT, PAGE_WIDTH, PRIMARY_RGB,
    ROW_HEIGHT,
};
use crate::model::{Attachment, DeliverySchedule, PurchaseOrder};

const RIGHT_EDGE: f64 = PAGE_WIDTH - MARGIN;
const TABLE_X: f64 = MARGIN;
const TABLE_WIDTH: f64 = 540.0;
const LINE_STEP: f64 = 15.0;

fn primary() -> Color {
    Color::rgb(PRIMARY_RGB.0, PRIMARY_RGB.1, PRIMARY_RGB.2)
}

fn band() -> Color {
    Color::rgb(BAND_RGB.0, BAND_RGB.1, BAND_RGB.2)
}

/// Flips a top-down offset into PDF user space.
fn flip(y_top: f64) -> f64 {
    PAGE_HEIGHT - y_top
}

fn put_text(page: &mut Page, font: Font, size: f64, x: f64, y_top: f64, text: &str) -> Result<()> {
    page.text()
        .set_font(font, size)
        .at(x, flip(y_top) - size)
        .write(text)?;
    Ok(())
}

fn put_text_right(
    page: &mut Page,
    font: Font,
    size: f64,
    right: f64,
    y_top: f64,
    text: &str,
) -> Result<()> {
    let width = measure_text(text, font.clone(), size);
    put_text(page, font, size, right - width, y_top, text)
}

/// Greedy word wrap against the Helvetica metrics tables.
fn wrap_text(text: &str, font: Font, size: f64, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if measure_text(&candidate, font.clone(), size) <= max_width || current.is_empty() {
                current = candidate;
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        if !current.is_empty() || paragraph.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Draws a JPEG attachment scaled to `width`, keeping aspect ratio.
///
/// A decode failure is not fatal: the render logs it and continues without
/// the image.
fn draw_attachment(
    page: &mut Page,
    name: &str,
    attachment: &Attachment,
    x: f64,
    y_top: f64,
    width: f64,
) -> Result<()> {
    let image = match Image::from_jpeg_data(attachment.data.clone()) {
        Ok(image) => image,
        Err(e) => {
            warn!(attachment = name, error = %e, "skipping attachment: not a decodable JPEG");
            return Ok(());
        }
    };
    let height = width * image.height() as f64 / image.width() as f64;
    page.add_image(name, image);
    page.draw_image(name, x, flip(y_top) - height, width, height)?;
    Ok(())
}

/// The emitted content stream carries all graphics operations before any
/// text; the last fill color set on a page is therefore the color every
/// glyph on it takes. Forcing black here keeps the text readable no matter
/// which band fill was set last.
fn finish_page(doc: &mut Document, mut page: Page) {
    page.graphics().set_fill_color(Color::black());
    doc.add_page(page);
}

fn band_row(page: &mut Page, y_top: f64) {
    page.graphics()
        .set_fill_color(band())
        .rect(TABLE_X, flip(y_top) - ROW_HEIGHT, TABLE_WIDTH, ROW_HEIGHT)
        .fill();
}

/// Pale header bar with a navy border; the column captions sit inside it.
fn header_bar(page: &mut Page, y_top: f64, captions: &[(f64, &str)]) -> Result<()> {
    page.graphics()
        .set_fill_color(band())
        .set_stroke_color(primary())
        .set_line_width(1.0)
        .rect(TABLE_X, flip(y_top) - ROW_HEIGHT, TABLE_WIDTH, ROW_HEIGHT)
        .fill_stroke();
    for &(x, caption) in captions {
        put_text(page, Font::HelveticaBold, 9.0, x, y_top + 9.0, caption)?;
    }
    Ok(())
}

/// Shared top-left/top-right header: logo, document title, PO metadata.
fn draw_masthead(
    page: &mut Page,
    title: &str,
    meta: &[(&str, &str)],
    logo: Option<&Attachment>,
) -> Result<()> {
    if let Some(logo) = logo {
        draw_attachment(page, "logo", logo, MARGIN, 50.0, 100.0)?;
    }
    put_text_right(page, Font::HelveticaBold, 24.0, RIGHT_EDGE, 50.0, title)?;
    let mut y = 80.0;
    for &(label, value) in meta {
        put_text_right(
            page,
            Font::Helvetica,
            10.0,
            RIGHT_EDGE,
            y,
            &format!("{label}: {value}"),
        )?;
        y += LINE_STEP;
    }
    Ok(())
}

/// Company identity block on the left; returns the top-down offset after
/// the last line.
fn draw_company_block(
    page: &mut Page,
    name: &str,
    address: &str,
    gstin: &str,
    pan_no: &str,
) -> Result<f64> {
    put_text(page, Font::HelveticaBold, 12.0, MARGIN, 130.0, name)?;
    let mut y = 145.0;
    for line in address.split('\n') {
        put_text(page, Font::Helvetica, 10.0, MARGIN, y, line)?;
        y += LINE_STEP;
    }
    put_text(page, Font::Helvetica, 10.0, MARGIN, y + 15.0, &format!("GSTIN: {gstin}"))?;
    put_text(page, Font::Helvetica, 10.0, MARGIN, y + 30.0, &format!("PAN NO: {pan_no}"))?;
    Ok(y)
}

/// Tinted "Issued to:" box at `y_top`, 200x80 pt.
fn draw_client_box(
    page: &mut Page,
    y_top: f64,
    client_name: &str,
    client_address: &str,
    client_gstin: &str,
) -> Result<()> {
    page.graphics()
        .set_fill_color(band())
        .rect(MARGIN, flip(y_top) - 80.0, 200.0, 80.0)
        .fill();
    put_text(page, Font::HelveticaBold, 10.0, 60.0, y_top + 10.0, "Issued to:")?;
    put_text(page, Font::HelveticaBold, 10.0, 60.0, y_top + 25.0, client_name)?;
    let mut y = y_top + 40.0;
    for line in client_address.split('\n') {
        put_text(page, Font::Helvetica, 9.0, 60.0, y, line)?;
        y += 12.0;
    }
    put_text(page, Font::Helvetica, 9.0, 60.0, y, &format!("GSTIN: {client_gstin}"))?;
    Ok(())
}

/// Full-width tinted "Shipped to:" box; the address is clamped to three
/// wrapped lines so it cannot spill past the box.
fn draw_shipped_box(page: &mut Page, y_top: f64, shipped_to: &str) -> Result<()> {
    page.graphics()
        .set_fill_color(band())
        .rect(MARGIN, flip(y_top) - 70.0, 490.0, 70.0)
        .fill();
    put_text(page, Font::HelveticaBold, 10.0, 60.0, y_top + 10.0, "Shipped to:")?;
    let lines = wrap_text(shipped_to, Font::Helvetica, 9.0, 470.0);
    for (idx, line) in lines.iter().take(3).enumerate() {
        put_text(page, Font::Helvetica, 9.0, 60.0, y_top + 25.0 + idx as f64 * 12.0, line)?;
    }
    Ok(())
}

fn draw_schedule_row(page: &mut Page, row: &ScheduleRow, y_top: f64) -> Result<()> {
    if row.banded {
        band_row(page, y_top);
    }
    let y = y_top + 7.0;
    put_text(page, Font::Helvetica, 9.0, 60.0, y, &row.serial)?;
    put_text(page, Font::Helvetica, 9.0, 110.0, y, &row.particulars.replace('\n', " "))?;
    put_text(page, Font::Helvetica, 9.0, 290.0, y, &row.total_quantity)?;
    put_text(page, Font::Helvetica, 9.0, 390.0, y, &row.delivery_date)?;
    put_text(page, Font::Helvetica, 9.0, 490.0, y, &row.quantity_to_delivery)?;
    Ok(())
}

fn draw_invoice_row(page: &mut Page, row: &InvoiceRow, y_top: f64) -> Result<()> {
    if row.banded {
        band_row(page, y_top);
    }
    let y = y_top + 7.0;
    put_text(page, Font::Helvetica, 9.0, 60.0, y, &row.serial)?;
    put_text(page, Font::Helvetica, 9.0, 110.0, y, &row.particulars)?;
    put_text(page, Font::Helvetica, 9.0, 250.0, y, &row.hsn_code)?;
    put_text(page, Font::Helvetica, 9.0, 320.0, y, &row.quantity)?;
    put_text_right(page, Font::Helvetica, 9.0, 450.0, y, &row.rate)?;
    put_text_right(page, Font::Helvetica, 9.0, RIGHT_EDGE, y, &row.amount)?;
    Ok(())
}

/// Renders a delivery schedule as PDF bytes.
///
/// Output reproduces the schedule layout: masthead, company block, tinted
/// client and shipped-to boxes, the item-wise table with banded rows and
/// blanked continuation columns, terms, signature, and contact footer.
/// Long tables paginate; continuation pages do not repeat the column
/// headers.
pub fn render_delivery_schedule(schedule: &DeliverySchedule) -> Result<Vec<u8>> {
    let mut doc = Document::new();
    doc.set_title(format!("Delivery Schedule {}", schedule.po_no));
    let mut page = Page::a4();

    draw_masthead(
        &mut page,
        "Delivery Schedule",
        &[
            ("PO No", &schedule.po_no),
            ("PO Date", &schedule.po_date),
            ("Delivery Type", &schedule.delivery_type),
            ("Payment Terms", &schedule.payment_terms),
        ],
        schedule.logo.as_ref(),
    )?;

    let y = draw_company_block(
        &mut page,
        &schedule.company_name,
        &schedule.company_address,
        &schedule.gstin,
        &schedule.pan_no,
    )?;

    draw_client_box(
        &mut page,
        y + 60.0,
        &schedule.client_name,
        &schedule.client_address,
        &schedule.client_gstin,
    )?;
    draw_shipped_box(&mut page, y + 150.0, &schedule.shipped_to)?;

    let table_top = y + 240.0;
    put_text(
        &mut page,
        Font::HelveticaBold,
        11.0,
        MARGIN,
        table_top,
        "Item Wise Delivery Schedule:",
    )?;
    header_bar(
        &mut page,
        table_top + 20.0,
        &[
            (60.0, "S. NO."),
            (110.0, "PARTICULARS"),
            (290.0, "TOTAL QUANTITY"),
            (390.0, "DELIVERY DATE"),
            (490.0, "QUANTITY TO DELIVERY"),
        ],
    )?;

    let mut pager = Paginator::new(table_top + 20.0 + ROW_HEIGHT);
    for row in schedule_rows_from_items(&schedule.items) {
        if pager.needs_break() {
            finish_page(&mut doc, page);
            page = Page::a4();
            pager.break_page();
        }
        draw_schedule_row(&mut page, &row, pager.y())?;
        pager.advance(ROW_HEIGHT);
    }

    let mut terms_y = pager.y() + 50.0;
    if terms_y > PAGE_BREAK_AT {
        finish_page(&mut doc, page);
        page = Page::a4();
        terms_y = CONTINUATION_TOP;
    }
    put_text(&mut page, Font::Helvetica, 10.0, MARGIN, terms_y, "Terms and conditions:")?;
    for (idx, line) in wrap_text(&schedule.terms_and_conditions, Font::Helvetica, 9.0, 400.0)
        .iter()
        .enumerate()
    {
        put_text(&mut page, Font::Helvetica, 9.0, MARGIN, terms_y + 15.0 + idx as f64 * 12.0, line)?;
    }

    if let Some(signature) = &schedule.signature {
        draw_attachment(&mut page, "signature", signature, 430.0, terms_y + 20.0, 100.0)?;
    }
    put_text(&mut page, Font::Helvetica, 10.0, 460.0, terms_y + 130.0, "Authorised Signatory")?;
    put_text(&mut page, Font::Helvetica, 9.0, MARGIN, terms_y + 150.0, &schedule.contact_details)?;

    finish_page(&mut doc, page);
    let mut bytes = Vec::new();
    doc.write(&mut bytes)?;
    Ok(bytes)
}

/// Renders a purchase-order invoice as PDF bytes.
///
/// Same masthead/address scaffolding as the schedule, with the priced item
/// table, the stroked totals box (Sub Total, IGST, Advance, Total — all
/// two-decimal), signature, and the contact/terms footer.
pub fn render_purchase_order(order: &PurchaseOrder) -> Result<Vec<u8>> {
    let mut doc = Document::new();
    doc.set_title(format!("Purchase Order {}", order.po_no));
    let mut page = Page::a4();

    draw_masthead(
        &mut page,
        "Purchase Order",
        &[
            ("PO No", &order.po_no),
            ("PO Date", &order.po_date),
            ("Ref No", &order.ref_no),
        ],
        order.logo.as_ref(),
    )?;

    let y = draw_company_block(
        &mut page,
        &order.company_name,
        &order.company_address,
        &order.gstin,
        &order.pan_no,
    )?;

    draw_client_box(&mut page, y + 60.0, &order.client_name, &order.client_address, &order.client_gstin)?;
    draw_shipped_box(&mut page, y + 150.0, &order.shipped_to)?;

    put_text(
        &mut page,
        Font::Helvetica,
        10.0,
        MARGIN,
        y + 230.0,
        &format!("Delivery Date: {}", order.delivery_date),
    )?;
    put_text(
        &mut page,
        Font::Helvetica,
        10.0,
        MARGIN,
        y + 245.0,
        &format!("Payment Terms: {}", order.payment_terms),
    )?;

    let table_top = y + 270.0;
    put_text(&mut page, Font::HelveticaBold, 11.0, MARGIN, table_top, "Item Details:")?;
    header_bar(
        &mut page,
        table_top + 20.0,
        &[
            (60.0, "S. NO."),
            (110.0, "PARTICULARS"),
            (250.0, "HSN CODE"),
            (320.0, "QUANTITY"),
            (410.0, "RATE"),
            (480.0, "AMOUNT(Rs.)"),
        ],
    )?;

    let mut pager = Paginator::new(table_top + 20.0 + ROW_HEIGHT);
    for row in invoice_rows(&order.items) {
        if pager.needs_break() {
            finish_page(&mut doc, page);
            page = Page::a4();
            pager.break_page();
        }
        draw_invoice_row(&mut page, &row, pager.y())?;
        pager.advance(ROW_HEIGHT);
    }

    let mut totals_y = pager.y() + 10.0;
    if totals_y + 80.0 > PAGE_HEIGHT - MARGIN {
        finish_page(&mut doc, page);
        page = Page::a4();
        totals_y = CONTINUATION_TOP;
    }
    page.graphics()
        .set_stroke_color(primary())
        .set_line_width(1.0)
        .rect(350.0, flip(totals_y) - 80.0, 195.0, 80.0)
        .stroke();
    let igst_label = format!("IGST @ {}%", order.igst_rate);
    let rows: [(&str, f64, Font); 4] = [
        ("Sub Total", order.subtotal, Font::Helvetica),
        (&igst_label, order.igst_amount, Font::Helvetica),
        ("Advance", order.advance, Font::Helvetica),
        ("Total", order.total_amount, Font::HelveticaBold),
    ];
    for (idx, (label, value, font)) in rows.iter().enumerate() {
        let line_y = totals_y + 10.0 + idx as f64 * 15.0;
        put_text(&mut page, font.clone(), 10.0, 360.0, line_y, label)?;
        put_text_right(&mut page, font.clone(), 10.0, 535.0, line_y, &format_amount(Some(*value)))?;
    }

    if let Some(signature) = &order.signature {
        draw_attachment(&mut page, "signature", signature, 400.0, totals_y + 90.0, 80.0)?;
    }
    put_text(&mut page, Font::Helvetica, 10.0, 430.0, totals_y + 130.0, "Authorised Signatory")?;

    put_text(&mut page, Font::Helvetica, 9.0, MARGIN, totals_y + 120.0, &order.contact_details)?;
    put_text(&mut page, Font::Helvetica, 9.0, MARGIN, totals_y + 132.0, &order.email_details)?;
    put_text(&mut page, Font::Helvetica, 10.0, MARGIN, totals_y + 150.0, "Terms and conditions:")?;
    for (idx, line) in wrap_text(&order.shipped_to, Font::Helvetica, 9.0, 400.0)
        .iter()
        .take(4)
        .enumerate()
    {
        put_text(&mut page, Font::Helvetica, 9.0, MARGIN, totals_y + 165.0 + idx as f64 * 12.0, line)?;
    }

    finish_page(&mut doc, page);
    let mut bytes = Vec::new();
    doc.write(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{sample_delivery_schedule, sample_purchase_order};

    #[test]
    fn schedule_renders_pdf_bytes() {
        let pdf = render_delivery_schedule(&sample_delivery_schedule()).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert!(pdf.len() > 500);
    }

    #[test]
    fn purchase_order_renders_pdf_bytes() {
        let pdf = render_purchase_order(&sample_purchase_order()).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn bad_attachment_bytes_do_not_abort_the_render() {
        let mut schedule = sample_delivery_schedule();
        schedule.logo = Some(Attachment::new(vec![0x00, 0x01, 0x02]));
        schedule.signature = Some(Attachment::new(b"not a jpeg".to_vec()));
        let pdf = render_delivery_schedule(&schedule).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn long_schedules_paginate() {
        let mut schedule = sample_delivery_schedule();
        let template = schedule.items[0].clone();
        schedule.items = (0..60i64)
            .map(|i| {
                let mut item = template.clone();
                item.id = i;
                item
            })
            .collect();
        let pdf = render_delivery_schedule(&schedule).unwrap();
        // Each page object carries its own /MediaBox entry.
        let needle = b"/MediaBox";
        let pages = pdf.windows(needle.len()).filter(|w| w == needle).count();
        assert!(pages >= 2, "expected at least two pages, saw {pages}");
    }

    #[test]
    fn wrapping_respects_the_width_budget() {
        let lines = wrap_text(
            "one two three four five six seven eight nine ten",
            Font::Helvetica,
            9.0,
            80.0,
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(measure_text(line, Font::Helvetica, 9.0) <= 80.0 || !line.contains(' '));
        }
    }
}
