//! # docukit-api
//!
//! REST API server for docukit document generation, plus the matching
//! multipart HTTP client helper.

pub mod client;

mod api;
pub use api::{
    app, generate_delivery_schedule, generate_purchase_order, health_check,
    preview_delivery_schedule, AppError, ErrorResponse,
};
