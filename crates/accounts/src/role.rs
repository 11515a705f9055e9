use serde::{Deserialize, Serialize};

/// Closed set of actor kinds.
///
/// Behavior that varies by actor matches exhaustively on this enum at the few
/// real decision points (session gating, order-visibility scoping) instead of
/// scattering role string checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    ShopOwner,
    Rider,
    Admin,
}

impl Role {
    /// Whether this role places orders (as opposed to fulfilling or
    /// administering them).
    pub fn is_purchasing(self) -> bool {
        match self {
            Role::Customer => true,
            Role::ShopOwner | Role::Rider | Role::Admin => false,
        }
    }

    /// Whether this role participates in fulfilling orders.
    pub fn is_fulfilling(self) -> bool {
        match self {
            Role::ShopOwner | Role::Rider => true,
            Role::Customer | Role::Admin => false,
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Role::Customer => "CUSTOMER",
            Role::ShopOwner => "SHOP_OWNER",
            Role::Rider => "RIDER",
            Role::Admin => "ADMIN",
        };
        f.write_str(name)
    }
}
