use serde::{Deserialize, Serialize};
use std::fmt;

/// Endpoint of the archive service an operation is sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Zip,
    Unzip,
}

impl OperationKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            OperationKind::Zip => "zip",
            OperationKind::Unzip => "unzip",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// Payload sent to the archive service.
///
/// Serializes to the service's JSON body without a tag:
/// `Extract` becomes `{"archive_path", "extract_to_named_folder"}` and
/// `Create` becomes `{"archive_name", "paths"}`. Build these through
/// [`crate::command::builder`] so `archive_name` always carries the `.zip`
/// suffix and `source_paths` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArchiveOperationRequest {
    Extract {
        archive_path: String,
        extract_to_named_folder: bool,
    },
    Create {
        archive_name: String,
        #[serde(rename = "paths")]
        source_paths: Vec<String>,
    },
}

impl ArchiveOperationRequest {
    pub fn kind(&self) -> OperationKind {
        match self {
            ArchiveOperationRequest::Extract { .. } => OperationKind::Unzip,
            ArchiveOperationRequest::Create { .. } => OperationKind::Zip,
        }
    }
}
