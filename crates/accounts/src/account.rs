use serde::{Deserialize, Serialize};

use medfast_core::{AccountId, Entity};

use crate::approval::{Approvable, ApprovalStatus};
use crate::role::Role;

/// An actor account (customer, shop owner, rider, admin).
///
/// Accounts are created at registration with `Pending` approval and are never
/// deleted; blocking is a status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub role: Role,
    pub approval_status: ApprovalStatus,
}

impl Account {
    pub fn register(name: impl Into<String>, role: Role) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            role,
            approval_status: ApprovalStatus::Pending,
        }
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Approvable for Account {
    fn approval_status(&self) -> ApprovalStatus {
        self.approval_status
    }

    fn set_approval_status(&mut self, status: ApprovalStatus) {
        self.approval_status = status;
    }
}

/// A doctor profile listed for consultation booking.
///
/// Independent of orders; the same approval gate decides whether the profile
/// may take bookings at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalProfile {
    pub id: AccountId,
    pub name: String,
    /// e.g. "Orthopedics", "General Physician".
    pub specialty: String,
    /// Fee in smallest currency unit.
    pub consultation_fee: u64,
    pub available: bool,
    pub approval_status: ApprovalStatus,
}

impl ProfessionalProfile {
    pub fn register(
        name: impl Into<String>,
        specialty: impl Into<String>,
        consultation_fee: u64,
    ) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            specialty: specialty.into(),
            consultation_fee,
            available: true,
            approval_status: ApprovalStatus::Pending,
        }
    }
}

impl Entity for ProfessionalProfile {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Approvable for ProfessionalProfile {
    fn approval_status(&self) -> ApprovalStatus {
        self.approval_status
    }

    fn set_approval_status(&mut self, status: ApprovalStatus) {
        self.approval_status = status;
    }
}
