//! Merge commit message classification
//!
//! A [MergeMessageClassifier] compiles the rule table once from a [Config]:
//! user formats in their configured order, followed by the built-in formats
//! (`Default`, `SmartGit`, `BitBucketPull`, `BitBucketPullv7`, `GitHubPull`,
//! `RemoteTracking`). Each message is matched against the rules in order and
//! the first rule that matches at the start of the message wins.
//!
//! ```rust
//! # use merge_message::{config::Config, classifier::MergeMessageClassifier};
//! let classifier = MergeMessageClassifier::new(&Config::default())?;
//! let merge = classifier.classify("Merge branch 'feature/foo' into develop");
//! assert_eq!(merge.format_name(), Some("Default"));
//! assert_eq!(merge.target_branch(), Some("develop"));
//! # Ok::<(), merge_message::MergeMessageError>(())
//! ```
//!
//! The classifier holds only compiled, read-only state and can be shared
//! across threads.

pub mod message;
pub mod rules;
pub mod version_extractor;

pub use message::MergeMessage;
pub use rules::{MergeRule, RuleTable};
pub use version_extractor::VersionExtractor;

use crate::config::Config;
use crate::domain::SemanticVersionFormat;
use crate::error::{MergeMessageError, Result};

/// Classifies merge commit messages against an ordered rule table
#[derive(Debug, Clone)]
pub struct MergeMessageClassifier {
    rules: RuleTable,
    extractor: VersionExtractor,
    label_prefix: Option<String>,
    format: SemanticVersionFormat,
}

impl MergeMessageClassifier {
    /// Validate the configuration and compile every rule.
    ///
    /// # Errors
    /// * `Config` - duplicate or empty user format names
    /// * `Pattern` - a format pattern does not compile
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(MergeMessageClassifier {
            rules: RuleTable::build(&config.merge_message_formats)?,
            extractor: VersionExtractor::new()?,
            label_prefix: config.label_prefix.clone(),
            format: config.semantic_version_format,
        })
    }

    /// Classify one message. An empty or unrecognized message yields a
    /// result with every field absent.
    pub fn classify(&self, message: &str) -> MergeMessage {
        MergeMessage::parse(
            message,
            &self.rules,
            &self.extractor,
            self.label_prefix.as_deref(),
            self.format,
        )
    }

    /// Classify a message that may be missing, e.g. read from an optional
    /// commit field. A missing message is an `InvalidArgument` error, unlike
    /// the empty string.
    pub fn try_classify(&self, message: Option<&str>) -> Result<MergeMessage> {
        let message = message
            .ok_or_else(|| MergeMessageError::invalid_argument("merge message is missing"))?;
        Ok(self.classify(message))
    }

    /// The ordered rule table
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }
}

/// Build a classifier from `config` and classify a single message.
pub fn classify(message: &str, config: &Config) -> Result<MergeMessage> {
    Ok(MergeMessageClassifier::new(config)?.classify(message))
}
