use crate::error::{Error, ValidationError};

/// Terminal state of one invocation
#[derive(Debug)]
pub enum InvocationOutcome {
    /// Selection or name did not qualify; nothing was sent
    Skipped(ValidationError),
    /// The user dismissed the name prompt
    Cancelled,
    /// The call failed at the transport, the HTTP status or the service
    Failed(Error),
    /// The service confirmed the operation and a refresh was requested
    Completed {
        result_path: Option<String>,
        message: Option<String>,
    },
}

impl InvocationOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, InvocationOutcome::Completed { .. })
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            InvocationOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}
