use async_trait::async_trait;

/// What the user did with a text prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptResponse {
    pub accepted: bool,
    pub value: String,
}

impl PromptResponse {
    pub fn accepted(value: impl Into<String>) -> Self {
        Self {
            accepted: true,
            value: value.into(),
        }
    }

    pub fn cancelled() -> Self {
        Self {
            accepted: false,
            value: String::new(),
        }
    }
}

/// Asks the user for a single line of text
#[async_trait]
pub trait InputPrompt: Send + Sync {
    async fn prompt_text(&self, title: &str, default: &str) -> PromptResponse;
}
