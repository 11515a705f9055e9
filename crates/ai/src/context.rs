use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of one catalog item, passed in by the host so this
/// crate stays decoupled from the catalog aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemContext {
    pub id: String,
    pub name: String,
    pub category: String,
}

impl ItemContext {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
        }
    }
}
