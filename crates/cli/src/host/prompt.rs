use archive_commands_core::interfaces::{InputPrompt, PromptResponse};
use async_trait::async_trait;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

/// Asks on the terminal.
///
/// An empty line takes the suggested default, end of input cancels.
pub struct StdinPrompt;

#[async_trait]
impl InputPrompt for StdinPrompt {
    async fn prompt_text(&self, title: &str, default: &str) -> PromptResponse {
        eprint!("{title} [{default}]: ");
        let _ = std::io::stderr().flush();

        let mut line = String::new();
        let mut stdin = BufReader::new(tokio::io::stdin());
        match stdin.read_line(&mut line).await {
            Ok(0) => PromptResponse::cancelled(),
            Ok(_) => {
                let value = line.trim_end_matches(['\r', '\n']);
                if value.is_empty() {
                    PromptResponse::accepted(default)
                } else {
                    PromptResponse::accepted(value)
                }
            }
            Err(e) => {
                warn!("Failed to read archive name: {}", e);
                PromptResponse::cancelled()
            }
        }
    }
}
