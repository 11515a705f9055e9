use core::str::FromStr;

use medfast_core::ItemId;

use crate::client::{GenerateRequest, ModelClient};
use crate::context::ItemContext;
use crate::prompt;

/// Symptom/query-driven item suggestions against the shop's inventory.
///
/// Expects the model to reply with a bare JSON array of inventory ids.
/// Malformed replies, transport failures and ids the model invented all
/// degrade to an empty suggestion set; never an error.
pub fn suggest_items(
    client: &dyn ModelClient,
    query: &str,
    inventory: &[ItemContext],
) -> Vec<ItemId> {
    let request = GenerateRequest::json(prompt::smart_suggestions(query, inventory));

    let raw = match client.generate(&request) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(error = %err, "smart suggestions degraded to empty");
            return Vec::new();
        }
    };

    let ids: Vec<String> = match serde_json::from_str(&raw) {
        Ok(ids) => ids,
        Err(err) => {
            tracing::warn!(error = %err, "malformed suggestion payload; degrading to empty");
            return Vec::new();
        }
    };

    ids.iter()
        .filter_map(|raw| ItemId::from_str(raw).ok())
        .collect()
}
