//! Canonical-form validation for version strings.

use crate::types::{GateError, Result};

/// Compute the canonical form of a version string.
///
/// The PEP 440 safe-version rule: lower-case, then collapse every run of
/// characters that are neither ASCII alphanumerics nor `.` into a single
/// `-`. Dots carry structure and survive untouched. The transformation is
/// idempotent.
pub fn canonicalize(version: &str) -> String {
    let mut out = String::with_capacity(version.len());
    let mut in_run = false;
    for c in version.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() || c == '.' {
            in_run = false;
            out.push(c);
        } else if !in_run {
            in_run = true;
            out.push('-');
        }
    }
    out
}

/// Fail unless `version` already equals its canonical form.
///
/// The error carries the suggested canonical spelling so the caller can
/// surface it directly.
pub fn check(package: &str, version: &str) -> Result<()> {
    let suggested = canonicalize(version);
    if suggested != version {
        return Err(GateError::NotCanonical {
            package: package.to_string(),
            version: version.to_string(),
            suggested,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_string_round_trips() {
        for v in ["1.0.0", "1.0.0a1", "0.9.0rc1.dev2", "2.0.0-beta"] {
            assert_eq!(canonicalize(v), v);
        }
    }

    #[test]
    fn test_upper_case_is_lowered() {
        assert_eq!(canonicalize("1.0.0A1"), "1.0.0a1");
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(canonicalize("1.0.0 beta"), "1.0.0-beta");
        assert_eq!(canonicalize("1.0.0__beta"), "1.0.0-beta");
        assert_eq!(canonicalize("1.0.0 - beta"), "1.0.0-beta");
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        for v in ["1.0.0A1", "1 0 0", "v1.0+local"] {
            let once = canonicalize(v);
            assert_eq!(canonicalize(&once), once);
        }
    }

    #[test]
    fn test_check_accepts_canonical() {
        assert!(check("pkg", "1.0.0a1").is_ok());
    }

    #[test]
    fn test_check_rejects_with_suggestion() {
        let err = check("pkg", "1.0.0A1").unwrap_err();
        match err {
            GateError::NotCanonical {
                package,
                version,
                suggested,
            } => {
                assert_eq!(package, "pkg");
                assert_eq!(version, "1.0.0A1");
                assert_eq!(suggested, "1.0.0a1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
