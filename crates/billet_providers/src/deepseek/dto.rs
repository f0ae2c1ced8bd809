//! Wire types for the DeepSeek chat-completions API.

use billet_error::{ProviderError, ProviderErrorKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Pull the completion text out of a parsed response.
///
/// No choices, a missing message, or blank content all count as an empty
/// response so the retry layer can repeat the call.
pub(crate) fn extract_content(response: ChatResponse) -> Result<String, ProviderError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content);

    match content {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ProviderError::new(ProviderErrorKind::EmptyResponse)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billet_error::FailureClass;

    #[test]
    fn content_is_extracted_from_first_choice() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "A post."}}]}"#,
        )
        .unwrap();

        assert_eq!(extract_content(response).unwrap(), "A post.");
    }

    #[test]
    fn missing_choices_is_an_empty_response() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();

        let err = extract_content(response).unwrap_err();
        assert_eq!(err.classify(), FailureClass::EmptyResponse);
    }

    #[test]
    fn blank_content_is_an_empty_response() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "   "}}]}"#,
        )
        .unwrap();

        let err = extract_content(response).unwrap_err();
        assert_eq!(err.classify(), FailureClass::EmptyResponse);
    }
}
