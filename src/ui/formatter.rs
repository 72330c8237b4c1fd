//! Pure formatting functions for UI output.
//!
//! `render_*` functions build the text and are testable; `display_*`
//! functions print it.

use console::style;

use crate::classifier::{MergeMessage, RuleTable};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Render a classification as labelled lines.
///
/// Absent fields are shown as `-`. When no rule matched, a single line says so.
pub fn render_merge_message(merge: &MergeMessage) -> String {
    let format_name = match merge.format_name() {
        Some(name) => name,
        None => return "No merge message format matched".to_string(),
    };

    let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
    let rows = [
        ("Format", format_name.to_string()),
        (
            "Merged branch",
            or_dash(merge.merged_branch().map(|b| b.canonical().to_string())),
        ),
        ("Target branch", or_dash(merge.target_branch().map(String::from))),
        (
            "Pull request",
            or_dash(merge.pull_request_number().map(|n| format!("#{}", n))),
        ),
        ("Version", or_dash(merge.version().map(|v| v.to_string()))),
    ];

    rows.iter()
        .map(|(label, value)| format!("{:<14} {}", format!("{}:", label), value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Display a classification result.
pub fn display_merge_message(merge: &MergeMessage) {
    if merge.is_match() {
        println!("{}", style("Merge message").bold());
        for line in render_merge_message(merge).lines() {
            println!("  {}", line);
        }
    } else {
        display_status(&render_merge_message(merge));
    }
}

/// Render the rule table in evaluation order.
pub fn render_rules(rules: &RuleTable) -> Vec<String> {
    rules
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            let origin = if rules.is_builtin(i) { "built-in" } else { "user" };
            format!("{}. {} ({}): {}", i + 1, rule.name(), origin, rule.pattern())
        })
        .collect()
}

/// Display the rule table in evaluation order.
pub fn display_rules(rules: &RuleTable) {
    println!("{}", style("Merge message formats:").bold());
    for line in render_rules(rules) {
        println!("  {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::MergeMessageClassifier;
    use crate::config::Config;

    #[test]
    fn test_render_no_match() {
        let rendered = render_merge_message(&MergeMessage::default());
        assert_eq!(rendered, "No merge message format matched");
    }

    #[test]
    fn test_render_match() {
        let classifier = MergeMessageClassifier::new(&Config::default()).unwrap();
        let merge = classifier.classify("Merge pull request #42 from origin/release/2.3.0");
        let rendered = render_merge_message(&merge);
        assert!(rendered.contains("GitHubPull"));
        assert!(rendered.contains("refs/heads/release/2.3.0"));
        assert!(rendered.contains("#42"));
        assert!(rendered.contains("2.3.0"));
        assert!(rendered.lines().any(|l| l.starts_with("Target branch:") && l.ends_with('-')));
    }

    #[test]
    fn test_render_rules_marks_origin() {
        let config = Config::default().with_format("Custom", "^Custom");
        let classifier = MergeMessageClassifier::new(&config).unwrap();
        let lines = render_rules(classifier.rules());
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("1. Custom (user)"));
        assert!(lines[1].starts_with("2. Default (built-in)"));
    }
}
