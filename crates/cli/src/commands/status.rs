use anyhow::Result;
use archive_commands_core::{CommandKind, ControllerPolicy, ExtractVisibility, services::FixedPrompt};
use std::sync::Arc;

use super::session::Session;
use crate::cli::GlobalArgs;
use crate::display::print_status;

pub fn status_command(global: &GlobalArgs, paths: &[String], always_show_extract: bool) -> Result<()> {
    let visibility = if always_show_extract {
        ExtractVisibility::Always
    } else {
        ExtractVisibility::WhenEnabled
    };
    let policy = ControllerPolicy::default().with_extract_visibility(visibility);
    let session = Session::new(global, paths, Arc::new(FixedPrompt::cancelling()), policy)?;

    println!("📋 Selection: {} item(s)", paths.len());
    for kind in CommandKind::ALL {
        print_status(
            kind,
            session.controller.is_enabled(kind),
            session.controller.is_visible(kind),
        );
    }
    Ok(())
}
