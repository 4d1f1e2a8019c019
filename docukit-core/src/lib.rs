//! # docukit
//!
//! Rendering of business documents — purchase-order invoices and multi-date
//! delivery schedules — as paginated PDF byte streams and printable HTML.
//!
//! A document is an immutable snapshot: header fields, line items, and
//! optional logo/signature images. Renderers never mutate it, so concurrent
//! renders need no coordination.
//!
//! ## Quick Start
//!
//! ```rust
//! use docukit::render::pdf::render_delivery_schedule;
//! use docukit::sample::sample_delivery_schedule;
//!
//! # fn main() -> docukit::Result<()> {
//! let schedule = sample_delivery_schedule();
//! let pdf = render_delivery_schedule(&schedule)?;
//! assert!(pdf.starts_with(b"%PDF"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`model`] - Document types and line items
//! - [`group`] - Grouping of delivery items by article and quantity reconciliation
//! - [`layout`] - Shared table layout: display rows, banding, pagination, formatting
//! - [`render`] - PDF and HTML renderers
//! - [`sample`] - Built-in sample documents for previews and demos

pub mod error;
pub mod group;
pub mod layout;
pub mod model;
pub mod render;
pub mod sample;

pub use error::{DocError, Result};
pub use group::{group_items, quantities_reconcile, tally_groups, GroupTally};
pub use model::{
    Attachment, DeliverySchedule, InvoiceItem, ItemGroup, LineItem, PurchaseOrder,
};

/// Current version of docukit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
