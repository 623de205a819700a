//! PyPI-style registry client for verifying a version is unpublished.

use crate::types::{GateError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Registry JSON API response for package info.
///
/// Only the `releases` keys matter: they are the version strings of every
/// published release.
#[derive(Debug, Deserialize)]
struct PackageInfo {
    releases: HashMap<String, serde_json::Value>,
}

/// Client for the registry's per-package JSON route.
pub struct PypiClient {
    client: Client,
    base_url: Url,
}

impl PypiClient {
    /// Create a new client against the given registry base URL.
    pub fn new(base_url: Url, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("vergate/0.1")
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Fail if `version` is already published for `package`.
    ///
    /// One GET to `{base}/{package}/json`; any transport error or non-2xx
    /// status (404 included) is terminal for this invocation — the gate
    /// never green-lights a publish it could not verify.
    pub async fn check_unique(&self, package: &str, version: &str) -> Result<()> {
        let url = format!(
            "{}/{}/json",
            self.base_url.as_str().trim_end_matches('/'),
            urlencoding::encode(package)
        );
        debug!("Checking registry: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GateError::RegistryUnavailable {
                package: package.to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(GateError::RegistryUnavailable {
                package: package.to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let info: PackageInfo =
            response
                .json()
                .await
                .map_err(|e| GateError::RegistryUnavailable {
                    package: package.to_string(),
                    reason: format!("invalid response: {}", e),
                })?;

        debug!(
            "{} has {} published releases",
            package,
            info.releases.len()
        );

        if info.releases.contains_key(version) {
            return Err(GateError::AlreadyPublished {
                package: package.to_string(),
                version: version.to_string(),
            });
        }

        Ok(())
    }
}
