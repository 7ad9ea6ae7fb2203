use serde_json::Value;
use tracing::debug;

/// Decoded answer of the archive service.
///
/// Decoding is lenient and field by field: a missing or non-boolean
/// `success` reads as `false`, and a path, error or message of the wrong
/// type is dropped without affecting the others. The service names the
/// path `extract_path` for unzip and `archive_path` for zip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveOperationResult {
    pub success: bool,
    pub result_path: Option<String>,
    pub error: Option<String>,
    /// Informational text such as "Extracted 3 files"
    pub message: Option<String>,
}

impl ArchiveOperationResult {
    pub fn succeeded(result_path: impl Into<String>) -> Self {
        Self {
            success: true,
            result_path: Some(result_path.into()),
            ..Default::default()
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Interpret an already decoded body.
    ///
    /// Bodies that are not objects give an unsuccessful result rather than
    /// an error.
    pub fn from_body(body: &Value) -> Self {
        if !body.is_object() {
            debug!("Response body is not an object: {}", body);
            return Self::default();
        }

        Self {
            success: body.get("success").and_then(Value::as_bool).unwrap_or(false),
            result_path: string_field(body, "extract_path").or_else(|| string_field(body, "archive_path")),
            error: string_field(body, "error"),
            message: string_field(body, "message"),
        }
    }
}

fn string_field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(value) => Some(value.clone()),
        Value::Null => None,
        other => {
            debug!("Ignoring `{}` of unexpected type: {}", key, other);
            None
        }
    }
}
