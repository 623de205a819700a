//! The gate pipeline orchestrating all checks.

use crate::registry::PypiClient;
use crate::types::{GateError, Parameters, Result};
use crate::version::{channel, format};
use colored::Colorize;
use tracing::{debug, info};
use url::Url;

/// Linear validation pipeline: format check, optional channel check,
/// registry uniqueness check. The first failure terminates the run.
pub struct Gate {
    registry: PypiClient,
}

impl Gate {
    /// Create a gate for the given parameters.
    pub fn new(params: &Parameters, timeout_secs: u64) -> Result<Self> {
        let registry = PypiClient::new(params.warehouse.clone(), timeout_secs)?;
        Ok(Self { registry })
    }

    /// Run every check in order; all stages are read-only.
    pub async fn run(&self, params: &Parameters) -> Result<()> {
        format::check(&params.package, &params.version)?;
        debug!("{} {} is canonical", params.package, params.version);

        if let Some(expected) = params.expected {
            let actual = channel::classify(&params.version);
            if actual != expected {
                return Err(GateError::ChannelMismatch {
                    version: params.version.clone(),
                    actual,
                    expected,
                });
            }
            debug!("{} classifies as {}", params.version, actual);
        }

        if params.dry {
            info!("Dry run, skipping registry check");
        } else {
            self.registry
                .check_unique(&params.package, &params.version)
                .await?;
        }

        println!(
            "{} {} {} is valid and not present on {}.",
            "OK:".green().bold(),
            params.package,
            params.version,
            registry_label(&params.warehouse)
        );

        Ok(())
    }
}

/// Short registry name for the success line: the first label of a DNS
/// host (`pypi.org` prints as `pypi`), IPs and hostless URLs as-is.
fn registry_label(warehouse: &Url) -> String {
    match warehouse.host() {
        Some(url::Host::Domain(domain)) => {
            domain.split('.').next().unwrap_or(domain).to_string()
        }
        Some(host) => host.to_string(),
        None => warehouse.as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::VersionType;
    use mockito::Server;

    fn params(version: &str, warehouse: &str) -> Parameters {
        Parameters {
            package: "pkg".to_string(),
            version: version.to_string(),
            warehouse: Url::parse(warehouse).unwrap(),
            expected: None,
            dry: false,
        }
    }

    #[test]
    fn test_registry_label() {
        let label = |u: &str| registry_label(&Url::parse(u).unwrap());
        assert_eq!(label("https://pypi.org/pypi"), "pypi");
        assert_eq!(label("https://test.pypi.org/pypi"), "test");
        assert_eq!(label("http://localhost:8080"), "localhost");
        assert_eq!(label("http://127.0.0.1:8080"), "127.0.0.1");
    }

    #[tokio::test]
    async fn test_dry_run_skips_registry() {
        // Unroutable warehouse: the run only passes because no request is made.
        let mut p = params("1.0.0", "http://127.0.0.1:1/");
        p.dry = true;

        let gate = Gate::new(&p, 2).unwrap();
        assert!(gate.run(&p).await.is_ok());
    }

    #[tokio::test]
    async fn test_format_check_runs_before_registry() {
        let mut p = params("1.0.0A1", "http://127.0.0.1:1/");
        p.dry = false;

        let gate = Gate::new(&p, 2).unwrap();
        let err = gate.run(&p).await.unwrap_err();
        assert!(matches!(err, GateError::NotCanonical { .. }));
    }

    #[tokio::test]
    async fn test_channel_mismatch() {
        let mut p = params("1.0.0", "http://127.0.0.1:1/");
        p.expected = Some(VersionType {
            alpha: true,
            ..VersionType::RELEASE
        });

        let gate = Gate::new(&p, 2).unwrap();
        let err = gate.run(&p).await.unwrap_err();
        match err {
            GateError::ChannelMismatch {
                actual, expected, ..
            } => {
                assert!(actual.is_release());
                assert!(expected.alpha);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_channel_match_proceeds_to_registry() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/pkg/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"releases": {"0.9.0": []}}"#)
            .create_async()
            .await;

        let mut p = params("1.0.0a1.dev1", &server.url());
        p.expected = Some(VersionType {
            alpha: true,
            dev: true,
            ..VersionType::RELEASE
        });

        let gate = Gate::new(&p, 10).unwrap();
        let result = gate.run(&p).await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }
}
