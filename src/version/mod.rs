//! Local version-string checks.
//!
//! Everything in this module is pure and deterministic: channel
//! classification by substring inspection and PEP 440 safe-version
//! canonicalization. No I/O happens here.

pub mod channel;
pub mod format;

pub use channel::{classify, VersionType};
pub use format::canonicalize;
