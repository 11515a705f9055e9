//! Cart domain module: the per-customer aggregation of requested items.
//!
//! Cart lines carry a point-in-time price snapshot taken when the item is
//! first added, so checkout totals are predictable regardless of later
//! catalog edits.

pub mod cart;
pub mod pricing;

pub use cart::{Cart, CartLine};
pub use pricing::line_total;
