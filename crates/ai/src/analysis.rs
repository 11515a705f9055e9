use core::str::FromStr;

use serde::{Deserialize, Serialize};

use medfast_core::ItemId;

use crate::client::{GenerateRequest, ModelClient};
use crate::context::ItemContext;
use crate::prompt;

const NEUTRAL_SUMMARY: &str = "Could not read prescription details.";

/// Structured result of prescription-image analysis.
///
/// This is a suggestion source, not a domain event: the host may feed the
/// matched ids into cart calls, and an empty result is always safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrescriptionAnalysis {
    pub medicines_found: Vec<String>,
    pub matched_product_ids: Vec<String>,
    pub summary: String,
}

impl Default for PrescriptionAnalysis {
    fn default() -> Self {
        Self::neutral()
    }
}

impl PrescriptionAnalysis {
    /// The empty suggestion set every failure mode degrades to.
    pub fn neutral() -> Self {
        Self {
            medicines_found: Vec::new(),
            matched_product_ids: Vec::new(),
            summary: NEUTRAL_SUMMARY.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.medicines_found.is_empty() && self.matched_product_ids.is_empty()
    }

    /// Matched ids parsed into typed item ids; ids the model invented (or
    /// mangled) are dropped rather than erroring.
    pub fn matched_item_ids(&self) -> Vec<ItemId> {
        self.matched_product_ids
            .iter()
            .filter_map(|raw| ItemId::from_str(raw).ok())
            .collect()
    }
}

/// Analyze a prescription image against the shop's inventory.
///
/// Any failure — unavailable model, transport error, malformed JSON — is
/// logged and collapsed to [`PrescriptionAnalysis::neutral`]; this call never
/// blocks or corrupts the checkout path.
pub fn analyze_prescription(
    client: &dyn ModelClient,
    image_base64: &str,
    inventory: &[ItemContext],
) -> PrescriptionAnalysis {
    let request = GenerateRequest::json(prompt::prescription_analysis(inventory))
        .with_image(image_base64);

    let raw = match client.generate(&request) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(error = %err, "prescription analysis degraded to neutral");
            return PrescriptionAnalysis::neutral();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(analysis) => analysis,
        Err(err) => {
            tracing::warn!(error = %err, "malformed analysis payload; degrading to neutral");
            PrescriptionAnalysis::neutral()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::AiError;

    struct Canned(String);

    impl Canned {
        fn new(reply: impl Into<String>) -> Self {
            Self(reply.into())
        }
    }

    impl ModelClient for Canned {
        fn generate(&self, _request: &GenerateRequest) -> Result<String, AiError> {
            Ok(self.0.clone())
        }
    }

    struct Failing;

    impl ModelClient for Failing {
        fn generate(&self, _request: &GenerateRequest) -> Result<String, AiError> {
            Err(AiError::Transport("connection reset".to_string()))
        }
    }

    fn inventory() -> Vec<ItemContext> {
        vec![ItemContext::new("a1", "Azithromycin 500mg", "Antibiotic")]
    }

    #[test]
    fn well_formed_reply_parses_into_analysis() {
        let id = ItemId::new();
        let reply = format!(
            r#"{{"medicinesFound":["Azithromycin 500mg"],"matchedProductIds":["{id}"],"summary":"Antibiotic course"}}"#
        );
        let client = Canned::new(reply);
        let analysis = analyze_prescription(&client, "aGVsbG8=", &inventory());

        assert_eq!(analysis.medicines_found, vec!["Azithromycin 500mg"]);
        assert_eq!(analysis.matched_item_ids(), vec![id]);
        assert_eq!(analysis.summary, "Antibiotic course");
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let client = Canned::new(r#"{"summary":"Fever management"}"#);
        let analysis = analyze_prescription(&client, "aGVsbG8=", &inventory());
        assert!(analysis.medicines_found.is_empty());
        assert_eq!(analysis.summary, "Fever management");
    }

    #[test]
    fn malformed_json_degrades_to_neutral() {
        let client = Canned::new("The prescription says: take twice daily");
        let analysis = analyze_prescription(&client, "aGVsbG8=", &inventory());
        assert_eq!(analysis, PrescriptionAnalysis::neutral());
        assert!(analysis.is_empty());
    }

    #[test]
    fn transport_failure_degrades_to_neutral() {
        let analysis = analyze_prescription(&Failing, "aGVsbG8=", &inventory());
        assert_eq!(analysis, PrescriptionAnalysis::neutral());
    }

    #[test]
    fn invented_ids_are_dropped_from_typed_view() {
        let client = Canned::new(r#"{"matchedProductIds":["m1","not a uuid"],"summary":"x"}"#);
        let analysis = analyze_prescription(&client, "aGVsbG8=", &inventory());
        assert_eq!(analysis.matched_product_ids.len(), 2);
        assert!(analysis.matched_item_ids().is_empty());
    }
}
