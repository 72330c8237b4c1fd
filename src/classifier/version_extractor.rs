use crate::domain::{ReferenceName, SemanticVersion, SemanticVersionFormat};
use crate::error::{MergeMessageError, Result};
use regex::{Regex, RegexBuilder};

// release/, feature-, hotfix/ ... chained any number of times
const FLOW_PREFIX_PATTERN: &str = r"^(\w+[-/])*";
const LEADING_VERSION_PATTERN: &str = r"^\d+\.\d+(\.*\d+)*";
const URL_SCHEME_SEPARATOR: &str = "://";

/// Finds a version embedded in a merged branch name
#[derive(Debug, Clone)]
pub struct VersionExtractor {
    flow_prefix: Regex,
    leading_version: Regex,
}

impl VersionExtractor {
    pub fn new() -> Result<Self> {
        let flow_prefix = RegexBuilder::new(FLOW_PREFIX_PATTERN)
            .case_insensitive(true)
            .build()
            .map_err(|e| MergeMessageError::pattern("flow prefix", e))?;
        let leading_version = Regex::new(LEADING_VERSION_PATTERN)
            .map_err(|e| MergeMessageError::pattern("leading version", e))?;

        Ok(VersionExtractor {
            flow_prefix,
            leading_version,
        })
    }

    /// Extract a version from `merged_branch`.
    ///
    /// Returns `None` unless both a label prefix and a merged branch are given
    /// and the branch name, once flow prefixes and the label prefix are
    /// removed, starts with a version that parses under `format`.
    pub fn extract(
        &self,
        label_prefix: Option<&str>,
        merged_branch: Option<&ReferenceName>,
        format: SemanticVersionFormat,
    ) -> Option<SemanticVersion> {
        let (prefix, branch) = match (label_prefix, merged_branch) {
            (Some(prefix), Some(branch)) => (prefix, branch),
            _ => return None,
        };

        let name = branch.without_origin();
        let mut offset = self.flow_prefix.find(name).map_or(0, |m| m.end());
        // the label prefix is matched literally and case-sensitively
        if name[offset..].starts_with(prefix) {
            offset += prefix.len();
        }

        let remaining = &name[offset..];
        let found = self.leading_version.find(remaining)?;
        if name[..offset].contains(URL_SCHEME_SEPARATOR) {
            tracing::debug!(branch = %name, "Skipping version that follows a URL scheme");
            return None;
        }

        let version = SemanticVersion::try_parse(found.as_str(), Some(prefix), format);
        tracing::debug!(
            branch = %name,
            candidate = found.as_str(),
            parsed = version.is_some(),
            "Extracted version candidate from merged branch"
        );
        version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(prefix: Option<&str>, branch: &str) -> Option<SemanticVersion> {
        let extractor = VersionExtractor::new().unwrap();
        let reference = ReferenceName::from_branch_name(branch);
        extractor.extract(prefix, Some(&reference), SemanticVersionFormat::Strict)
    }

    #[test]
    fn test_requires_prefix_and_branch() {
        let extractor = VersionExtractor::new().unwrap();
        let reference = ReferenceName::from_branch_name("release/1.2.3");
        assert!(extractor
            .extract(None, Some(&reference), SemanticVersionFormat::Strict)
            .is_none());
        assert!(extractor
            .extract(Some("v"), None, SemanticVersionFormat::Strict)
            .is_none());
    }

    #[test]
    fn test_strips_flow_prefixes() {
        assert_eq!(
            extract(Some("v"), "release/2.3.0"),
            Some(SemanticVersion::new(2, 3, 0))
        );
        assert_eq!(
            extract(Some("v"), "Feature-hotfix/1.0.1"),
            Some(SemanticVersion::new(1, 0, 1))
        );
    }

    #[test]
    fn test_strips_label_prefix() {
        assert_eq!(
            extract(Some("v"), "release/v4.5.6"),
            Some(SemanticVersion::new(4, 5, 6))
        );
    }

    #[test]
    fn test_label_prefix_is_case_sensitive() {
        assert_eq!(extract(Some("v"), "release/V4.5.6"), None);
    }

    #[test]
    fn test_empty_prefix_still_extracts() {
        assert_eq!(
            extract(Some(""), "hotfix/1.2.4"),
            Some(SemanticVersion::new(1, 2, 4))
        );
    }

    #[test]
    fn test_version_must_lead() {
        assert_eq!(extract(Some("v"), "feature/foo.1.2.3"), None);
        assert_eq!(extract(Some("v"), "feature/foo"), None);
    }

    #[test]
    fn test_url_is_not_a_version() {
        assert_eq!(extract(Some("v"), "http://2.3.4"), None);
        assert_eq!(extract(Some("http://"), "http://2.3.4"), None);
        assert_eq!(extract(Some("//"), "http://2.3.4"), None);

        let extractor = VersionExtractor::new().unwrap();
        let reference = ReferenceName::from_branch_name("http://2.3.4");
        assert_eq!(
            extractor.extract(Some("http://2."), Some(&reference), SemanticVersionFormat::Loose),
            None
        );
    }

    #[test]
    fn test_ip_like_text_is_not_guarded() {
        let extractor = VersionExtractor::new().unwrap();
        let reference = ReferenceName::from_branch_name("192.168.1.1");
        assert_eq!(
            extractor.extract(Some("v"), Some(&reference), SemanticVersionFormat::Loose),
            Some(SemanticVersion {
                revision: Some(1),
                ..SemanticVersion::new(192, 168, 1)
            })
        );
    }

    #[test]
    fn test_unparsable_candidate_is_absent() {
        // four parts never satisfy the strict grammar
        assert_eq!(extract(Some("v"), "release/1.2.3.4"), None);
    }

    #[test]
    fn test_remote_name_is_removed() {
        assert_eq!(
            extract(Some("v"), "refs/remotes/origin/release/3.0.0"),
            Some(SemanticVersion::new(3, 0, 0))
        );
    }
}
