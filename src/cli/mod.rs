//! Command line workflow

pub mod orchestration;

pub use orchestration::{run_classify_workflow, ClassifyWorkflowArgs, WorkflowResult};
