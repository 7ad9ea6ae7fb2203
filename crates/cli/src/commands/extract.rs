use anyhow::{Result, bail};
use archive_commands_core::CommandKind;
use tracing::debug;

use super::session::{Session, settings_provider};
use crate::cli::GlobalArgs;
use crate::display::print_outcome;

pub async fn extract_command(
    global: &GlobalArgs,
    path: &str,
    extract_to_named_folder: Option<bool>,
) -> Result<()> {
    debug!("Extracting {} via {}", path, global.base_url);

    let mut session = Session::interactive(global, &[path])?;
    session.follow(settings_provider(global, extract_to_named_folder));

    let outcome = session.controller.extract().await;
    print_outcome(CommandKind::Extract, &outcome);

    if let Some(e) = outcome.error() {
        bail!("Extraction of {} failed: {}", path, e);
    }
    Ok(())
}
