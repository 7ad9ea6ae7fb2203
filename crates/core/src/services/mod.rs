//! Service implementations of the collaborator interfaces
//!
//! `HttpTransport` talks to a real archive service; the in-memory types back
//! hosts without a settings store or file browser of their own.

pub mod http_transport;
pub mod in_memory;

pub use http_transport::HttpTransport;
pub use in_memory::{FixedPrompt, InMemoryFileBrowser, InMemorySettings};
