pub mod request;
pub mod result;
pub mod selection;

// Re-export commonly used types
pub use request::{ArchiveOperationRequest, OperationKind};
pub use result::ArchiveOperationResult;
pub use selection::{Selection, SelectionEntry};
