//! Classification workflow behind the command line
//!
//! Keeps CLI argument parsing apart from the logic that turns a loaded
//! configuration and a message into a classification, so the workflow can be
//! called programmatically without depending on clap.

use anyhow::{Context, Result};

use crate::classifier::{MergeMessage, MergeMessageClassifier};
use crate::config::Config;
use crate::domain::SemanticVersionFormat;
use crate::error::MergeMessageError;

/// Arguments for the classification workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassifyWorkflowArgs {
    /// The merge commit message, `None` when none was supplied
    pub message: Option<String>,

    /// Replaces the configured label prefix
    pub label_prefix: Option<String>,

    /// Disables version extraction by clearing the label prefix
    pub no_label_prefix: bool,

    /// Replaces the configured version format
    pub format: Option<SemanticVersionFormat>,
}

/// Result of a successful classification workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The classified message
    pub merge: MergeMessage,

    /// The configuration after CLI overrides
    pub config: Config,
}

/// Apply CLI overrides to `config`.
pub fn apply_overrides(args: &ClassifyWorkflowArgs, mut config: Config) -> Config {
    if args.no_label_prefix {
        config.label_prefix = None;
    } else if let Some(prefix) = &args.label_prefix {
        config.label_prefix = Some(prefix.clone());
    }
    if let Some(format) = args.format {
        config.semantic_version_format = format;
    }
    config
}

/// Main classification workflow
///
/// 1. Apply CLI overrides on top of the loaded configuration
/// 2. Compile the rule table
/// 3. Classify the message
///
/// A missing message fails with `InvalidArgument`; an empty one is classified
/// as no match.
pub fn run_classify_workflow(args: ClassifyWorkflowArgs, config: Config) -> Result<WorkflowResult> {
    let config = apply_overrides(&args, config);
    let classifier =
        MergeMessageClassifier::new(&config).context("Failed to build merge message rules")?;

    let message = args
        .message
        .as_deref()
        .ok_or_else(|| MergeMessageError::invalid_argument("no merge message given"))?;
    let merge = classifier.classify(message);

    Ok(WorkflowResult { merge, config })
}
