use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    create_command, extract_command, list_command, settings_command, status_command,
};

#[derive(Parser, Debug)]
#[command(name = "archive-cmd")]
#[command(version, about = "Extract and create zip archives through the archive service", long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Base URL of the server hosting the archive service
    #[arg(long, global = true, env = "ARCHIVE_SERVICE_URL", default_value = "http://localhost:8888")]
    pub base_url: String,

    /// Token sent as `Authorization: token <TOKEN>`
    #[arg(long, global = true, env = "JUPYTER_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Directory the given paths are relative to (the server's root directory)
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Settings file (.json or .toml) holding `extractToNamedFolder`
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract a zip archive on the server
    #[command(visible_alias = "x")]
    Extract {
        /// Archive path relative to --root (e.g., data/archive.zip)
        path: String,

        /// Override the `extractToNamedFolder` setting for this call
        #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set)]
        extract_to_named_folder: Option<bool>,
    },
    /// Create a zip archive from files and directories
    #[command(visible_alias = "c")]
    Create {
        /// Paths relative to --root, archived in the given order
        #[arg(required = true)]
        paths: Vec<String>,

        /// Archive name; prompts when omitted (`.zip` is appended if missing)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Show which commands are enabled and visible for a selection
    Status {
        /// Selected paths relative to --root
        paths: Vec<String>,

        /// Show extract even when the selection cannot be extracted
        #[arg(long)]
        always_show_extract: bool,
    },
    /// List the registered commands
    #[command(name = "commands")]
    List,
    /// Show the settings the commands read
    Settings {
        /// Keep running and print every change to the settings file
        #[arg(short, long)]
        watch: bool,
    },
}

impl Cli {
    /// Execute the selected subcommand
    pub async fn execute(self) -> Result<()> {
        let global = self.global;
        match self.command {
            Commands::Extract {
                path,
                extract_to_named_folder,
            } => extract_command(&global, &path, extract_to_named_folder).await,
            Commands::Create { paths, name } => create_command(&global, &paths, name).await,
            Commands::Status {
                paths,
                always_show_extract,
            } => status_command(&global, &paths, always_show_extract),
            Commands::List => list_command(),
            Commands::Settings { watch } => settings_command(&global, watch).await,
        }
    }
}
