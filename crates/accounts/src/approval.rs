use serde::{Deserialize, Serialize};

/// Administrative approval state of an actor.
///
/// Unlike the order lifecycle this machine permits reversal: an administrator
/// may block a previously approved actor and unblock them later. Blocking is
/// a status change, never a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Blocked,
}

impl core::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ApprovalStatus::Pending => "PENDING",
            ApprovalStatus::Approved => "APPROVED",
            ApprovalStatus::Blocked => "BLOCKED",
        };
        f.write_str(name)
    }
}

/// Anything governed by the approval gate (accounts, professional profiles,
/// stores).
pub trait Approvable {
    fn approval_status(&self) -> ApprovalStatus;
    fn set_approval_status(&mut self, status: ApprovalStatus);
}

/// Administrative transition. Every move is legal; transitioning to the
/// current status is a no-op, not an error. Returns whether anything changed.
pub fn set_approval<T: Approvable>(subject: &mut T, new_status: ApprovalStatus) -> bool {
    let current = subject.approval_status();
    if current == new_status {
        return false;
    }
    subject.set_approval_status(new_status);
    tracing::info!(from = %current, to = %new_status, "approval status changed");
    true
}

/// What kind of session an actor's approval status permits. Enforced by the
/// host's login flow; computed here so the rule lives in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionGrant {
    /// Blocked actors are denied session creation outright.
    Denied,
    /// Pending actors get a degraded "awaiting approval" session: browsing
    /// only, no transactional actions (checkout, booking).
    AwaitingApproval,
    /// Approved actors transact normally.
    Full,
}

impl SessionGrant {
    pub fn for_status(status: ApprovalStatus) -> Self {
        match status {
            ApprovalStatus::Blocked => SessionGrant::Denied,
            ApprovalStatus::Pending => SessionGrant::AwaitingApproval,
            ApprovalStatus::Approved => SessionGrant::Full,
        }
    }

    pub fn of<T: Approvable>(subject: &T) -> Self {
        Self::for_status(subject.approval_status())
    }

    pub fn may_create_session(self) -> bool {
        !matches!(self, SessionGrant::Denied)
    }

    pub fn may_transact(self) -> bool {
        matches!(self, SessionGrant::Full)
    }
}
