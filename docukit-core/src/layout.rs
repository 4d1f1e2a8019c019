//! Shared table layout.
//!
//! The display-row plan (continuation blanking, row banding), two-decimal
//! amount formatting, the pagination cursor, and the page/brand constants
//! live here so the PDF and HTML renderers walk the exact same layout
//! instead of each re-deriving it.

use serde::Serialize;

use crate::group::group_items;
use crate::model::{InvoiceItem, ItemGroup, LineItem};

/// A4 portrait, in points.
pub const PAGE_WIDTH: f64 = 595.0;
pub const PAGE_HEIGHT: f64 = 842.0;
/// Outer margin on every side.
pub const MARGIN: f64 = 50.0;
/// Height of one table row, header bar included.
pub const ROW_HEIGHT: f64 = 25.0;
/// A row starting below this top-down offset goes on a fresh page.
pub const PAGE_BREAK_AT: f64 = PAGE_HEIGHT - 150.0;
/// Top-down cursor position at the start of a continuation page.
pub const CONTINUATION_TOP: f64 = 50.0;

/// Brand ink: dark navy, `#0C1D49`.
pub const PRIMARY_RGB: (f64, f64, f64) = (12.0 / 255.0, 29.0 / 255.0, 73.0 / 255.0);
/// Banding fill: pale blue, `#EAF6FF`.
pub const BAND_RGB: (f64, f64, f64) = (234.0 / 255.0, 246.0 / 255.0, 255.0 / 255.0);

/// Formats a monetary value with exactly two decimals; missing values
/// render as `"0.00"`.
pub fn format_amount(value: Option<f64>) -> String {
    format!("{:.2}", value.unwrap_or(0.0))
}

/// One display row of the delivery-schedule table.
///
/// The first row of a group carries the serial number, particulars, and
/// declared total; continuation rows (further delivery dates of the same
/// article) leave those three columns empty. `banded` alternates on the
/// rendered-row index, continuation rows included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub serial: String,
    pub particulars: String,
    pub total_quantity: String,
    pub delivery_date: String,
    pub quantity_to_delivery: String,
    pub banded: bool,
}

/// Flattens item groups into the display rows both renderers emit.
pub fn schedule_rows(groups: &[ItemGroup]) -> Vec<ScheduleRow> {
    let mut rows = Vec::new();
    for group in groups {
        for (idx, item) in group.items.iter().enumerate() {
            let first = idx == 0;
            rows.push(ScheduleRow {
                serial: if first { item.id.to_string() } else { String::new() },
                particulars: if first { item.particulars.clone() } else { String::new() },
                total_quantity: if first { item.total_quantity.clone() } else { String::new() },
                delivery_date: item.delivery_date.clone(),
                quantity_to_delivery: item.quantity_to_delivery.clone(),
                banded: rows.len() % 2 == 0,
            });
        }
    }
    rows
}

/// Convenience for callers holding raw line items.
pub fn schedule_rows_from_items(items: &[LineItem]) -> Vec<ScheduleRow> {
    schedule_rows(&group_items(items))
}

/// One display row of the purchase-order table, amounts pre-formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceRow {
    pub serial: String,
    pub particulars: String,
    pub hsn_code: String,
    pub quantity: String,
    pub rate: String,
    pub amount: String,
    pub banded: bool,
}

pub fn invoice_rows(items: &[InvoiceItem]) -> Vec<InvoiceRow> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| InvoiceRow {
            serial: item.id.to_string(),
            particulars: item.particulars.replace('\n', " "),
            hsn_code: item.hsn_code.clone(),
            quantity: item.quantity.replace('\n', " "),
            rate: format_amount(item.rate),
            amount: format_amount(item.amount),
            banded: idx % 2 == 0,
        })
        .collect()
}

/// Top-down pagination cursor for the PDF renderer.
///
/// Positions are measured from the top of the page; the PDF renderer maps
/// them into PDF user space at draw time. Callers check [`needs_break`]
/// before drawing a row and reset with [`break_page`] when it fires.
///
/// [`needs_break`]: Paginator::needs_break
/// [`break_page`]: Paginator::break_page
#[derive(Debug, Clone)]
pub struct Paginator {
    cursor: f64,
}

impl Paginator {
    pub fn new(start: f64) -> Self {
        Self { cursor: start }
    }

    /// Current top-down offset.
    pub fn y(&self) -> f64 {
        self.cursor
    }

    pub fn advance(&mut self, height: f64) {
        self.cursor += height;
    }

    /// Whether the next row would start past the page-break threshold.
    pub fn needs_break(&self) -> bool {
        self.cursor > PAGE_BREAK_AT
    }

    /// Moves the cursor to the top margin of a fresh page.
    pub fn break_page(&mut self) {
        self.cursor = CONTINUATION_TOP;
    }
}
