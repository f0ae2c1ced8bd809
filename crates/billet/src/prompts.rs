//! Fixed prompt templates.
//!
//! These are the only prompts the system knows. The tone goes into the
//! system instruction, the topic into the user instruction; neither
//! temperature is user-configurable.

use billet_core::CompletionRequest;

/// Sampling temperature for direct post-copy generation.
pub(crate) const POST_TEXT_TEMPERATURE: f32 = 0.4;

/// Sampling temperature for descriptive/creative generation.
pub(crate) const IMAGE_PROMPT_TEMPERATURE: f32 = 0.7;

/// Output token ceiling for both text operations.
pub(crate) const MAX_TOKENS: u32 = 2048;

/// Completion request for the post body.
pub(crate) fn post_text_request(topic: &str, tone: &str) -> CompletionRequest {
    let system = format!(
        "You are a highly skilled social-media marketing specialist. \
         You write posts for social networks in a {tone} tone."
    );
    let user = format!(
        "Write a social-media post about '{topic}'. \
         The post should be substantive and engaging for the audience."
    );
    CompletionRequest::new(system, user, POST_TEXT_TEMPERATURE, MAX_TOKENS)
}

/// Completion request for the image-description prompt.
pub(crate) fn image_prompt_request(topic: &str) -> CompletionRequest {
    let system = "You are an assistant that writes prompts for image-generation \
         models (such as Imagen or Midjourney). Compose one highly detailed, \
         vivid, creative image-generation prompt in English for the given topic. \
         The prompt must describe the subject, the environment, the style, the \
         lighting, and fine detail. Respond with the prompt only, no commentary \
         and no post text. Example: 'photo of a sleek, modern kitchen knife with \
         a Damascus steel pattern on the blade, resting on a dark granite \
         countertop next to freshly chopped vegetables, cinematic lighting, \
         ultra-realistic, 8k'."
        .to_string();
    let user = format!("Write such a prompt for the topic: '{topic}'.");
    CompletionRequest::new(system, user, IMAGE_PROMPT_TEMPERATURE, MAX_TOKENS)
}
