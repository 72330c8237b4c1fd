use crate::config::MergeMessageFormat;
use crate::error::{MergeMessageError, Result};
use regex::{Regex, RegexBuilder};

pub const DEFAULT: &str = "Default";
pub const SMART_GIT: &str = "SmartGit";
pub const BIT_BUCKET_PULL: &str = "BitBucketPull";
pub const BIT_BUCKET_PULL_V7: &str = "BitBucketPullv7";
pub const GIT_HUB_PULL: &str = "GitHubPull";
pub const REMOTE_TRACKING: &str = "RemoteTracking";

/// Built-in formats, in evaluation order
pub const BUILTIN_FORMATS: [(&str, &str); 6] = [
    (
        DEFAULT,
        r"^Merge (branch|tag) '(?<SourceBranch>[^']*)'(?: into (?<TargetBranch>[^\s]*))*",
    ),
    (
        SMART_GIT,
        r"^Finish (?<SourceBranch>[^\s]*)(?: into (?<TargetBranch>[^\s]*))*",
    ),
    (
        BIT_BUCKET_PULL,
        r"^Merge pull request #(?<PullRequestNumber>\d+) (from|in) (?<Source>.*) from (?<SourceBranch>[^\s]*) to (?<TargetBranch>[^\s]*)",
    ),
    (
        BIT_BUCKET_PULL_V7,
        r"^Pull request #(?<PullRequestNumber>\d+).*\r?\n\r?\nMerge in (?<Source>.*) from (?<SourceBranch>[^\s]*) to (?<TargetBranch>[^\s]*)",
    ),
    (
        GIT_HUB_PULL,
        r"^Merge pull request #(?<PullRequestNumber>\d+) (from|in) (?:[^\s\/]+\/)?(?<SourceBranch>[^\s]*)(?: into (?<TargetBranch>[^\s]*))*",
    ),
    (
        REMOTE_TRACKING,
        r"^Merge remote-tracking branch '(?<SourceBranch>[^\s]*)'(?: into (?<TargetBranch>[^\s]*))*",
    ),
];

/// A named, compiled merge message pattern
#[derive(Debug, Clone)]
pub struct MergeRule {
    name: String,
    pattern: Regex,
}

impl MergeRule {
    /// Compile a case-insensitive rule
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self> {
        let name = name.into();
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| MergeMessageError::pattern(name.clone(), e))?;
        Ok(MergeRule { name, pattern })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Match the rule against the start of `message`.
    ///
    /// The match need not consume the whole message. A match found only
    /// further into the message does not count.
    pub fn match_start<'m>(&self, message: &'m str) -> Option<regex::Captures<'m>> {
        self.pattern
            .captures(message)
            .filter(|caps| caps.get(0).map(|m| m.start()) == Some(0))
    }
}

/// Ordered rule sequence: user rules first, then the built-ins
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<MergeRule>,
    user_rule_count: usize,
}

impl RuleTable {
    /// Build the table from user formats followed by the built-in formats.
    ///
    /// Fails on the first pattern that does not compile. Names are not
    /// deduplicated: a user rule named like a built-in is simply tried first.
    pub fn build(user_formats: &[MergeMessageFormat]) -> Result<Self> {
        let mut rules = Vec::with_capacity(user_formats.len() + BUILTIN_FORMATS.len());
        for format in user_formats {
            rules.push(MergeRule::new(format.name.as_str(), &format.pattern)?);
        }
        for (name, pattern) in BUILTIN_FORMATS {
            rules.push(MergeRule::new(name, pattern)?);
        }

        tracing::debug!(
            user = user_formats.len(),
            total = rules.len(),
            "Built merge message rule table"
        );

        Ok(RuleTable {
            rules,
            user_rule_count: user_formats.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &MergeRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether the rule at `index` came from the built-in list
    pub fn is_builtin(&self, index: usize) -> bool {
        index >= self.user_rule_count && index < self.rules.len()
    }
}
