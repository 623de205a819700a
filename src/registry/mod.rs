//! Registry uniqueness checking.
//!
//! A single read-only lookup against the package index per run: no caching,
//! no retries, no pagination.

pub mod pypi;

pub use pypi::PypiClient;
