//! Domain types consumed by the classifier - reference names and versions

pub mod reference;
pub mod version;

pub use reference::{ReferenceName, REMOTE_TRACKING_BRANCH_PREFIX};
pub use version::{SemanticVersion, SemanticVersionFormat};
