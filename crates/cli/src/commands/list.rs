use anyhow::Result;
use archive_commands_core::{CommandKind, PLUGIN_ID};

pub fn list_command() -> Result<()> {
    println!("🔌 {PLUGIN_ID}");
    for kind in CommandKind::ALL {
        let descriptor = kind.descriptor();
        println!("   {:<24} {}", descriptor.id, descriptor.label);
        println!("   {:<24} {} ({})", "", descriptor.caption, descriptor.category);
    }
    Ok(())
}
