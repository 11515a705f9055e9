//! `medfast-ai`
//!
//! **Responsibility:** Best-effort generative-AI boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on the catalog/order aggregates (it takes snapshots).
//! - It must not mutate domain state; it only produces suggestions the host
//!   may feed into cart calls.
//! - Every public entry degrades to a usable neutral value on failure; model
//!   errors never propagate to callers.

pub mod analysis;
pub mod chat;
pub mod client;
pub mod context;
pub mod prompt;
pub mod suggest;

pub use analysis::{analyze_prescription, PrescriptionAnalysis};
pub use chat::{chat, CHAT_FALLBACK};
pub use client::{AiError, GenerateRequest, ModelClient};
pub use context::ItemContext;
pub use suggest::suggest_items;
