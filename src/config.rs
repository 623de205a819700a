//! CLI configuration and parameter resolution.

use crate::manifest;
use crate::types::{GateError, Parameters, Result};
use crate::version::VersionType;
use clap::Parser;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_WAREHOUSE: &str = "https://pypi.org/pypi";

/// Pre-publish gate validating a package's declared version.
#[derive(Parser, Debug, Clone)]
#[command(name = "vergate")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Package or module name whose declared version is gated
    pub package: String,

    /// Registry base URL to check against
    #[arg(short = 'w', long, default_value = DEFAULT_WAREHOUSE)]
    pub warehouse: String,

    /// Expect an alpha version
    #[arg(long)]
    pub alpha: bool,

    /// Expect a beta version
    #[arg(long)]
    pub beta: bool,

    /// Expect a release candidate
    #[arg(long)]
    pub rc: bool,

    /// Expect a dev version
    #[arg(long)]
    pub dev: bool,

    /// Expect a final release with no channel markers
    #[arg(long)]
    pub release: bool,

    /// Skip the registry check (local validation only)
    #[arg(long)]
    pub dry: bool,

    /// Directory holding the package's working tree
    #[arg(long, default_value = ".")]
    pub manifest: PathBuf,

    /// Use this version string instead of reading the working tree
    #[arg(long)]
    pub set_version: Option<String>,

    /// Registry request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Resolve the parsed flags into an immutable parameter bundle.
    pub fn resolve(&self) -> Result<Parameters> {
        let expected = self.expected_channels()?;
        let warehouse = Url::parse(&self.warehouse)?;
        let version = manifest::resolve_version(
            &self.package,
            &self.manifest,
            self.set_version.as_deref(),
        )?;

        Ok(Parameters {
            package: self.package.clone(),
            version,
            warehouse,
            expected,
            dry: self.dry,
        })
    }

    /// Map the channel flags to an expected channel set.
    ///
    /// The legal combinations are enumerated exhaustively: `--release`
    /// combines with nothing; `--alpha`/`--beta`/`--rc` are pairwise
    /// exclusive, each optionally joined by `--dev`; `--dev` may stand
    /// alone. Everything off the table is rejected.
    pub fn expected_channels(&self) -> Result<Option<VersionType>> {
        let expected = match (self.release, self.alpha, self.beta, self.rc, self.dev) {
            (false, false, false, false, false) => return Ok(None),
            (true, false, false, false, false) => VersionType::RELEASE,
            (false, true, false, false, dev) => VersionType {
                alpha: true,
                dev,
                ..VersionType::RELEASE
            },
            (false, false, true, false, dev) => VersionType {
                beta: true,
                dev,
                ..VersionType::RELEASE
            },
            (false, false, false, true, dev) => VersionType {
                rc: true,
                dev,
                ..VersionType::RELEASE
            },
            (false, false, false, false, true) => VersionType {
                dev: true,
                ..VersionType::RELEASE
            },
            _ => {
                return Err(GateError::ConflictingChannels {
                    flags: self.channel_flags().join(" "),
                })
            }
        };

        Ok(Some(expected))
    }

    /// The channel flags actually given, for error reporting.
    fn channel_flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.release {
            flags.push("--release");
        }
        if self.alpha {
            flags.push("--alpha");
        }
        if self.beta {
            flags.push("--beta");
        }
        if self.rc {
            flags.push("--rc");
        }
        if self.dev {
            flags.push("--dev");
        }
        flags
    }
}
