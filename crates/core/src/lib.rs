//! `medfast-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! typed identifiers, the domain error taxonomy, the entity trait and the
//! feature-flag configuration shared by every functional area.

pub mod entity;
pub mod error;
pub mod features;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use features::Features;
pub use id::{AccountId, ItemId, OrderId};
