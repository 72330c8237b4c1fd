use super::rules::{RuleTable, REMOTE_TRACKING};
use super::version_extractor::VersionExtractor;
use crate::domain::{
    ReferenceName, SemanticVersion, SemanticVersionFormat, REMOTE_TRACKING_BRANCH_PREFIX,
};

const SOURCE_BRANCH: &str = "SourceBranch";
const TARGET_BRANCH: &str = "TargetBranch";
const PULL_REQUEST_NUMBER: &str = "PullRequestNumber";

/// Structured metadata extracted from one merge commit message.
///
/// Every field is absent when the message is empty or no rule matched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeMessage {
    format_name: Option<String>,
    merged_branch: Option<ReferenceName>,
    target_branch: Option<String>,
    pull_request_number: Option<u32>,
    version: Option<SemanticVersion>,
}

impl MergeMessage {
    /// Name of the rule that matched
    pub fn format_name(&self) -> Option<&str> {
        self.format_name.as_deref()
    }

    pub fn merged_branch(&self) -> Option<&ReferenceName> {
        self.merged_branch.as_ref()
    }

    pub fn target_branch(&self) -> Option<&str> {
        self.target_branch.as_deref()
    }

    pub fn pull_request_number(&self) -> Option<u32> {
        self.pull_request_number
    }

    pub fn is_merged_pull_request(&self) -> bool {
        self.pull_request_number.is_some()
    }

    /// Version embedded in the merged branch name
    pub fn version(&self) -> Option<&SemanticVersion> {
        self.version.as_ref()
    }

    /// Whether any rule matched
    pub fn is_match(&self) -> bool {
        self.format_name.is_some()
    }

    pub(crate) fn parse(
        message: &str,
        rules: &RuleTable,
        extractor: &VersionExtractor,
        label_prefix: Option<&str>,
        format: SemanticVersionFormat,
    ) -> Self {
        if message.is_empty() {
            return MergeMessage::default();
        }

        for rule in rules.iter() {
            tracing::trace!(rule = rule.name(), "Trying merge message format");
            let captures = match rule.match_start(message) {
                Some(captures) => captures,
                None => continue,
            };

            let merged_branch = captures
                .name(SOURCE_BRANCH)
                .map(|m| merged_branch_name(rule.name(), m.as_str()));
            let target_branch = captures
                .name(TARGET_BRANCH)
                .map(|m| m.as_str().to_string());
            let pull_request_number = captures
                .name(PULL_REQUEST_NUMBER)
                .and_then(|m| parse_pull_request_number(m.as_str()));
            let version = extractor.extract(label_prefix, merged_branch.as_ref(), format);

            tracing::debug!(
                rule = rule.name(),
                merged_branch = ?merged_branch.as_ref().map(ReferenceName::canonical),
                pull_request = ?pull_request_number,
                "Merge message matched"
            );

            return MergeMessage {
                format_name: Some(rule.name().to_string()),
                merged_branch,
                target_branch,
                pull_request_number,
                version,
            };
        }

        tracing::debug!("No merge message format matched");
        MergeMessage::default()
    }
}

fn merged_branch_name(format_name: &str, source_branch: &str) -> ReferenceName {
    if format_name == REMOTE_TRACKING && !source_branch.starts_with(REMOTE_TRACKING_BRANCH_PREFIX)
    {
        ReferenceName::from_branch_name(format!(
            "{}{}",
            REMOTE_TRACKING_BRANCH_PREFIX, source_branch
        ))
    } else {
        ReferenceName::from_branch_name(source_branch)
    }
}

/// Digits only, no sign, no leading zero unless the number is zero, and at
/// most `i32::MAX`
fn parse_pull_request_number(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if text.len() > 1 && text.starts_with('0') {
        return None;
    }
    let number: i32 = text.parse().ok()?;
    u32::try_from(number).ok()
}
