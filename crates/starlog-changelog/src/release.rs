//! Release detection

use tracing::debug;

use starlog_core::types::ReleaseContext;

/// Decide whether a changelog block should be generated for a version.
///
/// True only for valid, non-prerelease semver versions; prerelease versions
/// accumulate into the next stable block.
pub fn generate_on(context: &ReleaseContext) -> bool {
    let decision = context.version.as_deref().is_some_and(|version| {
        let version = version.strip_prefix('v').unwrap_or(version);
        semver::Version::parse(version).is_ok_and(|v| v.pre.is_empty())
    });
    debug!(version = context.version.as_deref(), decision, "generate-on");
    decision
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_version_generates() {
        assert!(generate_on(&ReleaseContext::new("1.2.3")));
        assert!(generate_on(&ReleaseContext::new("v1.2.3")));
    }

    #[test]
    fn test_prerelease_does_not_generate() {
        assert!(!generate_on(&ReleaseContext::new("1.2.3-alpha.1")));
        assert!(!generate_on(&ReleaseContext::new("2.0.0-rc.1")));
    }

    #[test]
    fn test_invalid_version_does_not_generate() {
        assert!(!generate_on(&ReleaseContext::new("not-a-version")));
        assert!(!generate_on(&ReleaseContext::default()));
    }
}
