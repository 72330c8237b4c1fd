use std::io::Read;

use anyhow::Result;
use clap::Parser;

use merge_message::classifier::MergeMessageClassifier;
use merge_message::cli::{run_classify_workflow, ClassifyWorkflowArgs};
use merge_message::config;
use merge_message::domain::SemanticVersionFormat;
use merge_message::ui;

#[derive(clap::Parser)]
#[command(
    name = "merge-message",
    about = "Extract branch, pull request and version metadata from merge commit messages"
)]
struct Args {
    /// Merge commit message, or `-` to read it from stdin
    message: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Label prefix expected in front of versions")]
    label_prefix: Option<String>,

    #[arg(long, help = "Do not extract versions from merged branches")]
    no_label_prefix: bool,

    #[arg(long, value_enum, help = "Version grammar")]
    format: Option<SemanticVersionFormat>,

    #[arg(long, help = "Show merge message formats in evaluation order and exit")]
    list_rules: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    if args.version {
        println!("merge-message {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if args.list_rules {
        return list_rules(&config);
    }

    let message = match args.message.as_deref() {
        Some("-") => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Some(buffer.trim_end_matches(['\r', '\n']).to_string())
        }
        other => other.map(String::from),
    };

    let workflow_args = ClassifyWorkflowArgs {
        message,
        label_prefix: args.label_prefix,
        no_label_prefix: args.no_label_prefix,
        format: args.format,
    };

    match run_classify_workflow(workflow_args, config) {
        Ok(result) => {
            ui::display_merge_message(&result.merge);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

fn list_rules(config: &config::Config) -> Result<()> {
    let classifier = match MergeMessageClassifier::new(config) {
        Ok(classifier) => classifier,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_rules(classifier.rules());
    Ok(())
}
