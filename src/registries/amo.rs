//! AMO Registry - addons.mozilla.org upload implementation
//!
//! Issues the single authenticated multipart upload this tool exists for:
//! - manifest version extraction
//! - package payload read (fully in memory, no streaming)
//! - `PUT` to the fixed v4 submission endpoint
//! - response interpretation (201/202 success, anything else rejected)

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use std::path::Path;
use tracing::debug;

use crate::core::error::PublishError;
use crate::core::traits::{AddonRegistry, UploadResponse};
use crate::validation::ManifestValidator;

/// Fixed add-on submission endpoint
pub const AMO_ENDPOINT: &str = "https://addons.mozilla.org/api/v4/addons/";

/// Client for the addons.mozilla.org submission API
pub struct AmoRegistry {
    client: Client,
    endpoint: String,
}

impl Default for AmoRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AmoRegistry {
    /// Create a client against the production endpoint
    pub fn new() -> Self {
        Self::with_endpoint(AMO_ENDPOINT)
    }

    /// Create a client against an alternate endpoint
    ///
    /// Integration tests point this at a local mock server; production use
    /// always goes through [`AmoRegistry::new`].
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl AddonRegistry for AmoRegistry {
    fn name(&self) -> &str {
        "addons.mozilla.org"
    }

    async fn upload(
        &self,
        package: &Path,
        manifest: &Path,
        token: &str,
    ) -> Result<UploadResponse, PublishError> {
        // Both local reads happen before any network activity.
        let record = ManifestValidator::new().read_version(manifest).await?;

        let payload = tokio::fs::read(package)
            .await
            .map_err(|e| PublishError::FileRead {
                path: package.display().to_string(),
                source: e,
            })?;

        debug!(
            "uploading {} ({} bytes) as {} version {}",
            package.display(),
            payload.len(),
            record.name.as_deref().unwrap_or("add-on"),
            record.version
        );

        let file_name = package
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("addon.xpi")
            .to_string();

        // The multipart boundary and Content-Type header come from reqwest;
        // hand-setting `multipart/form-data` without a boundary is malformed.
        let form = Form::new()
            .part("upload", Part::bytes(payload).file_name(file_name))
            .text("version", record.version);

        let response = self
            .client
            .put(&self.endpoint)
            .header("Authorization", format!("JWT {}", token))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        // The body is JSON on error statuses too.
        let body: UploadResponse = response.json().await?;

        if status == StatusCode::CREATED || status == StatusCode::ACCEPTED {
            Ok(body)
        } else {
            Err(PublishError::Rejected {
                status_text: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
                message: body.error.unwrap_or_default(),
            })
        }
    }
}
