use anyhow::{Context, Result};
use archive_commands_core::cache::LoadStatus;
use tracing::info;

use super::session::{Session, settings_provider};
use crate::cli::GlobalArgs;

pub async fn settings_command(global: &GlobalArgs, watch: bool) -> Result<()> {
    let no_paths: [&str; 0] = [];
    let mut session = Session::interactive(global, &no_paths)?;
    session.follow(settings_provider(global, None));

    let snapshot = session.cache.settled().await;
    let source = match &global.settings {
        Some(path) => path.display().to_string(),
        None => "defaults".to_string(),
    };
    if snapshot.status == LoadStatus::Failed {
        println!("⚠️  Could not load {source}, using defaults");
    }
    println!("⚙️  Settings ({source}):");
    println!("   extractToNamedFolder = {}", snapshot.config.extract_to_named_folder);

    if !watch {
        return Ok(());
    }

    session.cache.on_change(|config| {
        println!("   extractToNamedFolder = {}", config.extract_to_named_folder);
    });
    info!("Watching for settings changes, press Ctrl-C to stop");
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;
    Ok(())
}
