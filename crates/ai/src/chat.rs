use crate::client::{GenerateRequest, ModelClient};
use crate::prompt;

/// Reply shown when the assistant cannot produce an answer.
pub const CHAT_FALLBACK: &str = "I'm having trouble processing your request right now.";

/// One turn with the chat assistant, carrying the customer's cart names as
/// context. Always returns displayable text; failures collapse to
/// [`CHAT_FALLBACK`].
pub fn chat(client: &dyn ModelClient, message: &str, cart_item_names: &[String]) -> String {
    let instruction = prompt::chat_instruction(cart_item_names);
    let request = GenerateRequest::text(format!("{instruction}\n\nUser: {message}"));

    match client.generate(&request) {
        Ok(reply) if !reply.trim().is_empty() => reply,
        Ok(_) => CHAT_FALLBACK.to_string(),
        Err(err) => {
            tracing::warn!(error = %err, "chat assistant degraded to fallback");
            CHAT_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::AiError;

    struct Canned(String);

    impl ModelClient for Canned {
        fn generate(&self, _request: &GenerateRequest) -> Result<String, AiError> {
            Ok(self.0.clone())
        }
    }

    struct Failing;

    impl ModelClient for Failing {
        fn generate(&self, _request: &GenerateRequest) -> Result<String, AiError> {
            Err(AiError::Transport("timeout".to_string()))
        }
    }

    #[test]
    fn reply_passes_through() {
        let client = Canned("Take it after food.".to_string());
        assert_eq!(chat(&client, "when do I take this?", &[]), "Take it after food.");
    }

    #[test]
    fn blank_reply_falls_back() {
        let client = Canned("   ".to_string());
        assert_eq!(chat(&client, "hello", &[]), CHAT_FALLBACK);
    }

    #[test]
    fn failure_falls_back() {
        assert_eq!(chat(&Failing, "hello", &[]), CHAT_FALLBACK);
    }
}
