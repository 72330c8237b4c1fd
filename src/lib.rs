pub mod classifier;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use classifier::{classify, MergeMessage, MergeMessageClassifier};
pub use error::{MergeMessageError, Result};
