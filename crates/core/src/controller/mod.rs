//! Command controller
//!
//! Runs one invocation of "extract" or "create" from start to finish:
//!
//! ```text
//! Idle -> Validating -> Invalid: Idle
//!                    -> BuildingRequest -> Calling -> Failure: Idle
//!                                                  -> Success: RefreshingListing -> Idle
//! ```
//!
//! Nothing is retried and nothing is shown to the user; every terminal state
//! is logged and returned as an [`InvocationOutcome`].

mod outcome;
mod policy;

pub use outcome::InvocationOutcome;
pub use policy::{ControllerPolicy, ExtractVisibility, SettingsRead};

use crate::{
    cache::ConfigCache,
    command::{CommandKind, build_create_request, build_extract_request, default_archive_name},
    error::Error,
    gateway::ArchiveGateway,
    interfaces::{FileBrowser, InputPrompt},
    types::{ArchiveOperationRequest, ArchiveOperationResult},
    validation::{check_create, check_extract, validate_for_create, validate_for_extract},
};
use std::sync::Arc;
use tracing::{Instrument, debug, error, info, info_span, warn};

/// Title of the name prompt shown by "create"
pub const CREATE_PROMPT_TITLE: &str = "Archive name";

/// Steps of a single invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Validating,
    BuildingRequest,
    Calling,
    RefreshingListing,
    Idle,
}

pub struct CommandController {
    browser: Arc<dyn FileBrowser>,
    prompt: Arc<dyn InputPrompt>,
    gateway: ArchiveGateway,
    config: ConfigCache,
    policy: ControllerPolicy,
}

impl CommandController {
    pub fn new(
        browser: Arc<dyn FileBrowser>,
        prompt: Arc<dyn InputPrompt>,
        gateway: ArchiveGateway,
        config: ConfigCache,
    ) -> Self {
        Self {
            browser,
            prompt,
            gateway,
            config,
            policy: ControllerPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ControllerPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Whether `kind` may be invoked for the current selection
    pub fn is_enabled(&self, kind: CommandKind) -> bool {
        let selection = self.browser.current_selection();
        match kind {
            CommandKind::Extract => validate_for_extract(&selection),
            CommandKind::Create => validate_for_create(&selection),
        }
    }

    /// Whether `kind` should be shown in menus for the current selection
    pub fn is_visible(&self, kind: CommandKind) -> bool {
        match (kind, self.policy.extract_visibility) {
            (CommandKind::Extract, ExtractVisibility::WhenEnabled) => self.is_enabled(kind),
            (CommandKind::Extract, ExtractVisibility::Always) => true,
            (CommandKind::Create, _) => true,
        }
    }

    pub async fn execute(&self, kind: CommandKind) -> InvocationOutcome {
        let span = info_span!("invocation", command = kind.id());
        match kind {
            CommandKind::Extract => self.run_extract().instrument(span).await,
            CommandKind::Create => self.run_create().instrument(span).await,
        }
    }

    /// Dispatch by registered command id; `None` for ids this controller
    /// does not own
    pub async fn execute_by_id(&self, id: &str) -> Option<InvocationOutcome> {
        match CommandKind::from_id(id) {
            Some(kind) => Some(self.execute(kind).await),
            None => {
                debug!("Unknown command id {}", id);
                None
            }
        }
    }

    pub async fn extract(&self) -> InvocationOutcome {
        self.execute(CommandKind::Extract).await
    }

    pub async fn create(&self) -> InvocationOutcome {
        self.execute(CommandKind::Create).await
    }

    async fn run_extract(&self) -> InvocationOutcome {
        step(Step::Validating);
        let selection = self.browser.current_selection();
        let entry = match check_extract(&selection) {
            Ok(entry) => entry,
            Err(reason) => {
                warn!("Cannot extract: {}", reason);
                step(Step::Idle);
                return InvocationOutcome::Skipped(reason);
            }
        };

        step(Step::BuildingRequest);
        let config = match self.policy.settings_read {
            SettingsRead::Current => self.config.config(),
            SettingsRead::AwaitLoad => self.config.settled().await.config,
        };
        let request = build_extract_request(entry, &config);

        info!("Extracting {}...", entry.name);
        self.call(CommandKind::Extract, request).await
    }

    async fn run_create(&self) -> InvocationOutcome {
        step(Step::Validating);
        let selection = self.browser.current_selection();
        if let Err(reason) = check_create(&selection) {
            debug!("Cannot create archive: {}", reason);
            step(Step::Idle);
            return InvocationOutcome::Skipped(reason);
        }

        let response = self
            .prompt
            .prompt_text(CREATE_PROMPT_TITLE, &default_archive_name(&selection))
            .await;
        if !response.accepted {
            debug!("Archive name prompt dismissed");
            step(Step::Idle);
            return InvocationOutcome::Cancelled;
        }

        step(Step::BuildingRequest);
        let request = match build_create_request(&selection, &response.value) {
            Ok(request) => request,
            Err(reason) => {
                debug!("Not creating archive: {}", reason);
                step(Step::Idle);
                return InvocationOutcome::Skipped(reason);
            }
        };

        info!("Creating {} from {} item(s)...", archive_name(&request), selection.len());
        self.call(CommandKind::Create, request).await
    }

    /// Calling -> RefreshingListing on confirmed success, Idle otherwise
    async fn call(&self, kind: CommandKind, request: ArchiveOperationRequest) -> InvocationOutcome {
        step(Step::Calling);
        let result = match self.gateway.send(kind.operation(), &request).await {
            Ok(result) => result,
            Err(e) => {
                error!("Error calling archive service: {}", e);
                step(Step::Idle);
                return InvocationOutcome::Failed(e);
            }
        };

        if !result.success {
            let ArchiveOperationResult { error, .. } = result;
            error!(
                "{} failed: {}",
                kind.descriptor().label,
                error.as_deref().unwrap_or("no error reported")
            );
            step(Step::Idle);
            return InvocationOutcome::Failed(Error::ApplicationFailure(error));
        }

        match &result.result_path {
            Some(path) => info!("{} succeeded: {}", kind.descriptor().label, path),
            None => info!("{} succeeded", kind.descriptor().label),
        }
        if let Some(message) = &result.message {
            info!("{}", message);
        }

        step(Step::RefreshingListing);
        if let Err(e) = self.browser.refresh_listing().await {
            error!("Failed to refresh file listing: {}", e);
        }
        step(Step::Idle);

        InvocationOutcome::Completed {
            result_path: result.result_path,
            message: result.message,
        }
    }
}

fn step(next: Step) {
    debug!(step = ?next, "invocation step");
}

fn archive_name(request: &ArchiveOperationRequest) -> &str {
    match request {
        ArchiveOperationRequest::Create { archive_name, .. } => archive_name,
        ArchiveOperationRequest::Extract { archive_path, .. } => archive_path,
    }
}
