//! Order lifecycle domain module.
//!
//! Turns a cart plus a fulfillment choice into an immutable order snapshot,
//! advances orders through the fixed delivery state machine, and commits the
//! stock deduction against the catalog when an order reaches `Delivered`.

pub mod lifecycle;
pub mod order;
pub mod status;
pub mod store;

pub use lifecycle::Lifecycle;
pub use order::{checkout, CheckoutRequest, Order, OrderLine};
pub use status::OrderStatus;
pub use store::{InMemoryOrderStore, OrderStore};
