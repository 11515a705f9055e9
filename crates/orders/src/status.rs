use serde::{Deserialize, Serialize};

/// Order delivery lifecycle.
///
/// Forward movement is strictly sequential: each non-terminal state has a
/// fixed successor set, with no skipping and no backward transitions.
/// `Reviewing` is the optional detour for prescription-derived orders, which
/// must be explicitly approved into `Preparing` (or rejected to `Cancelled`).
/// `Cancelled` is reachable from every non-terminal state; `Delivered` and
/// `Cancelled` have zero outgoing transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Reviewing,
    Preparing,
    ReadyForPickup,
    OnTheWay,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Legal forward successors. `Pending` alone has two, because the
    /// prescription review detour is optional at that point.
    pub fn successors(self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Reviewing, OrderStatus::Preparing],
            OrderStatus::Reviewing => &[OrderStatus::Preparing],
            OrderStatus::Preparing => &[OrderStatus::ReadyForPickup],
            OrderStatus::ReadyForPickup => &[OrderStatus::OnTheWay],
            OrderStatus::OnTheWay => &[OrderStatus::Delivered],
            OrderStatus::Delivered | OrderStatus::Cancelled => &[],
        }
    }

    /// Whether `target` is a legal next status from here. Cancellation is
    /// legal from any non-terminal state.
    pub fn can_advance_to(self, target: OrderStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        target == OrderStatus::Cancelled || self.successors().contains(&target)
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Reviewing => "REVIEWING",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::ReadyForPickup => "READY_FOR_PICKUP",
            OrderStatus::OnTheWay => "ON_THE_WAY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        };
        f.write_str(name)
    }
}
