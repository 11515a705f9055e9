//! Accounts domain module: actor identities and the approval gate.
//!
//! Holds the closed set of actor roles, account and professional-profile
//! records, and the administrative approval workflow that gates whether an
//! actor may transact at all. Deliberately decoupled from the order
//! lifecycle: the host checks the session grant before invoking checkout.

pub mod account;
pub mod approval;
pub mod role;

pub use account::{Account, ProfessionalProfile};
pub use approval::{set_approval, Approvable, ApprovalStatus, SessionGrant};
pub use role::Role;
