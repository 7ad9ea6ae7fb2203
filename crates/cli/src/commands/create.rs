use anyhow::{Result, bail};
use archive_commands_core::{CommandKind, services::FixedPrompt};
use std::sync::Arc;
use tracing::debug;

use super::session::Session;
use crate::cli::GlobalArgs;
use crate::display::print_outcome;

pub async fn create_command(global: &GlobalArgs, paths: &[String], name: Option<String>) -> Result<()> {
    debug!("Archiving {} path(s) via {}", paths.len(), global.base_url);

    let session = match name {
        Some(name) => Session::with_prompt(global, paths, Arc::new(FixedPrompt::accepting(name)))?,
        None => Session::interactive(global, paths)?,
    };

    let outcome = session.controller.create().await;
    print_outcome(CommandKind::Create, &outcome);

    if let Some(e) = outcome.error() {
        bail!("Creating the archive failed: {}", e);
    }
    Ok(())
}
