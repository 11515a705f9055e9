//! Prompt construction for the assistant, analyzer and suggestion calls.
//!
//! Prompts embed an inventory context so the model can only match against
//! items the shop actually carries.

use crate::context::ItemContext;

/// Prompt for multimodal prescription analysis. The model is asked for a JSON
/// object with `medicinesFound`, `matchedProductIds` and `summary`.
pub fn prescription_analysis(inventory: &[ItemContext]) -> String {
    let inventory_lines = inventory
        .iter()
        .map(|item| format!("{}: {}", item.id, item.name))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert pharmacist AI.\n\
         Analyze this medical prescription image carefully.\n\
         \n\
         Task:\n\
         1. Read the list of medicines demanded by the customer/doctor in the image.\n\
         2. If dosage is mentioned (e.g. 500mg), include it in the name.\n\
         3. Compare the found medicines against the inventory list provided below.\n\
         4. Return a JSON object with:\n\
         - \"medicinesFound\": every medicine name/dosage clearly visible in the image.\n\
         - \"matchedProductIds\": the inventory ids that strictly match the found medicines.\n\
         - \"summary\": a professional summary of the prescription.\n\
         \n\
         Inventory:\n{inventory_lines}"
    )
}

/// Prompt for symptom-driven suggestions. The model is asked for a bare JSON
/// array of matching inventory ids.
pub fn smart_suggestions(query: &str, inventory: &[ItemContext]) -> String {
    // Context is serialized as JSON so names with quotes survive intact.
    let inventory_json =
        serde_json::to_string(inventory).unwrap_or_else(|_| "[]".to_string());

    format!(
        "User query: \"{query}\"\n\
         \n\
         Task: identify which items from the inventory below best match the\n\
         user's query or symptoms. Return ONLY a JSON array of the matching\n\
         ids. If nothing matches, return an empty array [].\n\
         \n\
         Inventory:\n{inventory_json}"
    )
}

/// System instruction for the chat assistant, carrying the customer's current
/// cart as context.
pub fn chat_instruction(cart_item_names: &[String]) -> String {
    let cart_summary = if cart_item_names.is_empty() {
        "User cart is empty.".to_string()
    } else {
        format!(
            "User currently has these items in cart: {}.",
            cart_item_names.join(", ")
        )
    };

    format!(
        "You are the AI pharmacist for an on-demand pharmacy.\n\
         Context: {cart_summary}\n\
         \n\
         Rules:\n\
         1. Clarify you are an AI, not a doctor.\n\
         2. Be concise (max 2 sentences).\n\
         3. If the user asks about their cart items, provide specific advice.\n\
         4. Suggest complementary products when relevant."
    )
}
