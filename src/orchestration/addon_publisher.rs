//! Addon Publisher - Main orchestrator for the sign-and-upload run
//!
//! Manages the complete publishing workflow:
//! - short-lived token issuance from the API credential pair
//! - the single multipart upload to the distribution registry
//! - run-state tracking and the final report for the pipeline

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

use crate::core::error::PublishError;
use crate::core::state_machine::{RunState, RunStateMachine};
use crate::core::traits::{AddonRegistry, UploadResponse};
use crate::registries::AmoRegistry;
use crate::security::{ApiCredentials, TokenIssuer};

/// Inputs for one publishing run, sourced at the process boundary
#[derive(Debug)]
pub struct PublishInputs {
    /// Path to the package file to upload
    pub xpi: PathBuf,

    /// Path to the JSON manifest file declaring the version
    pub manifest: PathBuf,

    /// Credential pair for the distribution API
    pub credentials: ApiCredentials,
}

/// Report returned after a publishing run
#[derive(Debug, Clone)]
pub struct PublishReport {
    pub success: bool,
    pub registry: String,
    pub version: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub errors: Vec<String>,
    pub duration_ms: u128,
    pub state: String,
}

/// Main add-on publisher orchestrator
pub struct AddonPublisher {
    registry: Box<dyn AddonRegistry>,
    state_machine: RunStateMachine,
}

impl Default for AddonPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl AddonPublisher {
    /// Create a publisher against the production registry
    pub fn new() -> Self {
        Self::with_registry(Box::new(AmoRegistry::new()))
    }

    /// Create a publisher against a specific registry implementation
    pub fn with_registry(registry: Box<dyn AddonRegistry>) -> Self {
        Self {
            registry,
            state_machine: RunStateMachine::new(),
        }
    }

    /// Run the sign → upload sequence
    ///
    /// This is the sole catch point: any error raised by the token issuer or
    /// the upload client ends up in the failure report, never as a panic and
    /// never re-raised to the caller. The API secret is scrubbed from the
    /// reported message.
    pub async fn publish(&mut self, inputs: &PublishInputs) -> PublishReport {
        let start_time = Instant::now();

        match self.run(inputs).await {
            Ok(response) => {
                self.state_machine.transition(RunState::Success);

                if let Some(version) = &response.version {
                    debug!("Published version {}", version);
                }

                self.report(response.version, Vec::new(), start_time)
            }
            Err(error) => {
                let message = inputs.credentials.mask_secret_in(&error.to_string());
                self.state_machine.fail(&message);

                self.report(None, vec![message], start_time)
            }
        }
    }

    async fn run(&mut self, inputs: &PublishInputs) -> Result<UploadResponse, PublishError> {
        self.state_machine.transition(RunState::Signing);
        let token = TokenIssuer::issue(&inputs.credentials)?;

        self.state_machine.transition(RunState::Uploading);
        self.registry
            .upload(&inputs.xpi, &inputs.manifest, &token)
            .await
    }

    fn report(
        &self,
        version: Option<String>,
        errors: Vec<String>,
        start_time: Instant,
    ) -> PublishReport {
        let success = errors.is_empty();

        PublishReport {
            success,
            registry: self.registry.name().to_string(),
            version,
            published_at: success.then(Utc::now),
            errors,
            duration_ms: start_time.elapsed().as_millis(),
            state: format!("{:?}", self.state_machine.state()),
        }
    }

    /// Run-state transition history, for diagnostics
    pub fn history(&self) -> String {
        self.state_machine.history()
    }
}
