use crate::types::OperationKind;
use serde::Serialize;
use std::fmt;

/// Palette category both commands are listed under
pub const COMMAND_CATEGORY: &str = "File Operations";

/// The two commands the extension registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    Extract,
    Create,
}

/// Static metadata a host needs to register a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    pub kind: CommandKind,
    pub id: &'static str,
    pub label: &'static str,
    pub caption: &'static str,
    pub category: &'static str,
}

impl CommandKind {
    pub const ALL: [CommandKind; 2] = [CommandKind::Extract, CommandKind::Create];

    pub fn id(self) -> &'static str {
        match self {
            CommandKind::Extract => "filebrowser:zip-file",
            CommandKind::Create => "filebrowser:create-zip",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Service endpoint the command calls
    pub fn operation(self) -> OperationKind {
        match self {
            CommandKind::Extract => OperationKind::Unzip,
            CommandKind::Create => OperationKind::Zip,
        }
    }

    pub fn descriptor(self) -> CommandDescriptor {
        let (label, caption) = match self {
            CommandKind::Extract => ("Extract Archive", "Extract the selected archive file"),
            CommandKind::Create => ("Create Archive", "Create a zip archive from the selected items"),
        };
        CommandDescriptor {
            kind: self,
            id: self.id(),
            label,
            caption,
            category: COMMAND_CATEGORY,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
