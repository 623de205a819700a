//! Release-channel classification of version strings.

use std::fmt;

/// Set of release-channel flags a version string carries.
///
/// The empty set means a final release. Flags are additive: `1.0.0a1.dev1`
/// is both alpha and dev.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VersionType {
    pub alpha: bool,
    pub beta: bool,
    pub rc: bool,
    pub dev: bool,
}

impl VersionType {
    /// The empty set: a final release with no channel markers.
    pub const RELEASE: VersionType = VersionType {
        alpha: false,
        beta: false,
        rc: false,
        dev: false,
    };

    pub fn is_release(&self) -> bool {
        !(self.alpha || self.beta || self.rc || self.dev)
    }
}

impl fmt::Display for VersionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_release() {
            return write!(f, "release");
        }
        let mut parts = Vec::new();
        if self.alpha {
            parts.push("alpha");
        }
        if self.beta {
            parts.push("beta");
        }
        if self.rc {
            parts.push("rc");
        }
        if self.dev {
            parts.push("dev");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// Classify a version string by substring presence.
///
/// Each flag is checked independently: `a` marks alpha, `b` beta, `rc` a
/// release candidate and `dev` a dev build. No numeric parsing, no format
/// validation; malformed strings classify like any other.
pub fn classify(version: &str) -> VersionType {
    VersionType {
        alpha: version.contains('a'),
        beta: version.contains('b'),
        rc: version.contains("rc"),
        dev: version.contains("dev"),
    }
}
