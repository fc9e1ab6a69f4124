//! Script generation call.

use crate::ai_types::{ChatRequest, Message};
use crate::client::LlmClient;
use crate::error::LlmError;

impl LlmClient {
    /// Run one completion with `system_prompt` as the system message and
    /// `user_input` as the user message. Returns the raw model text.
    ///
    /// # Errors
    /// Propagates transport, status and decoding failures from the completion service.
    pub async fn generate_script(
        &self,
        system_prompt: String,
        user_input: &str,
    ) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![Message::system(system_prompt), Message::user(user_input.to_owned())],
        };
        let output = self.chat_completion(&request).await?;
        tracing::debug!(model = %self.config.model, output_len = output.len(), "script generated");
        Ok(output)
    }
}
