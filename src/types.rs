//! Core types and errors for the version gate.

use crate::version::VersionType;
use thiserror::Error;
use url::Url;

/// Errors that can terminate a gate run.
///
/// Every variant is terminal: the pipeline fails fast on the first error and
/// never aggregates or downgrades one to a warning.
#[derive(Error, Debug)]
pub enum GateError {
    #[error("conflicting channel flags: {flags}")]
    ConflictingChannels { flags: String },

    #[error("cannot resolve the declared version of {package}: {reason}")]
    VersionResolution { package: String, reason: String },

    #[error("version {version} of {package} is not canonical, use {suggested} instead")]
    NotCanonical {
        package: String,
        version: String,
        suggested: String,
    },

    #[error("version {version} classifies as {actual}, expected {expected}")]
    ChannelMismatch {
        version: String,
        actual: VersionType,
        expected: VersionType,
    },

    #[error("registry lookup for {package} failed: {reason}")]
    RegistryUnavailable { package: String, reason: String },

    #[error("{package} {version} already exists on the registry, bump the declared version")]
    AlreadyPublished { package: String, version: String },

    #[error("invalid warehouse URL: {0}")]
    InvalidWarehouse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GateError>;

/// Resolved per-invocation parameters.
///
/// Built once by [`crate::config::Config::resolve`] and never mutated.
#[derive(Debug, Clone)]
pub struct Parameters {
    /// Package or module name being gated.
    pub package: String,
    /// The version string the working tree declares.
    pub version: String,
    /// Registry base URL, e.g. `https://pypi.org/pypi`.
    pub warehouse: Url,
    /// Channel set the version is expected to classify as, if any.
    pub expected: Option<VersionType>,
    /// Skip the registry check entirely.
    pub dry: bool,
}
