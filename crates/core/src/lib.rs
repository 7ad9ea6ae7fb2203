//! archive-commands - Orchestration of "extract archive" and "create archive"
//!
//! The archive work itself happens in a remote service. This crate provides:
//! - Selection validation and command enablement predicates
//! - Request construction for the service's `zip` and `unzip` endpoints
//! - A gateway normalizing transport and response failures
//! - A settings cache kept in sync with an external settings store
//! - A controller sequencing all of the above per invocation
pub mod cache;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod interfaces;
pub mod services;
pub mod types;
pub mod validation;

// Re-export commonly used types and traits
pub use error::{Error, Result, TransportError, ValidationError};
pub use types::*;

// Re-export main API components
pub use cache::{ConfigCache, SettingsSubscription};
pub use command::{CommandDescriptor, CommandKind};
pub use config::{ExtensionConfig, PLUGIN_ID};
pub use controller::{CommandController, ControllerPolicy, ExtractVisibility, InvocationOutcome, SettingsRead};
pub use gateway::ArchiveGateway;
