//! Document renderers.
//!
//! Each renderer walks one immutable document snapshot and emits output:
//! [`pdf`] produces paginated PDF bytes, [`html`] a printable HTML page.
//! Continuation-row blanking, row banding, pagination, and numeric
//! formatting are shared via [`crate::layout`], so both targets agree on
//! the table they show.

pub mod html;
pub mod pdf;
