//! vergate - pre-publish version gate.
//!
//! Validates a package's declared version before it is published:
//! - Resolves the declared version from the working tree
//! - Checks the string against its PEP 440 canonical form
//! - Optionally checks it matches an expected release channel
//! - Verifies the version is not already on the registry
//!
//! The pipeline is linear and fail-fast; every check is read-only.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use vergate::{Config, Gate};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::parse_from(["vergate", "pkg", "--dry"]);
//!     let params = config.resolve().unwrap();
//!     let gate = Gate::new(&params, config.timeout).unwrap();
//!     gate.run(&params).await.unwrap();
//! }
//! ```

pub mod config;
pub mod gate;
pub mod manifest;
pub mod registry;
pub mod types;
pub mod version;

pub use config::Config;
pub use gate::Gate;
pub use types::{GateError, Parameters, Result};
pub use version::{classify, VersionType};
