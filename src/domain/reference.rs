use std::fmt;

/// Prefix of local branch references
pub const LOCAL_BRANCH_PREFIX: &str = "refs/heads/";

/// Prefix of remote-tracking branch references
pub const REMOTE_TRACKING_BRANCH_PREFIX: &str = "refs/remotes/";

/// Prefix of tag references
pub const TAG_PREFIX: &str = "refs/tags/";

/// Prefixes used by hosting platforms for pull request references
pub const PULL_REQUEST_PREFIXES: [&str; 2] = ["refs/pull/", "refs/pull-requests/"];

const ORIGIN_PREFIX: &str = "origin/";

/// A canonical git reference name with its shortened forms
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceName {
    canonical: String,
    friendly: String,
    without_origin: String,
}

impl ReferenceName {
    /// Build a reference from a branch name.
    ///
    /// Names that already carry a known `refs/` prefix are taken as canonical,
    /// anything else is treated as a local branch. The empty string is accepted
    /// and yields the bare local branch prefix.
    pub fn from_branch_name(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        if has_known_prefix(name) {
            Self::from_canonical(name.to_string())
        } else {
            Self::from_canonical(format!("{}{}", LOCAL_BRANCH_PREFIX, name))
        }
    }

    fn from_canonical(canonical: String) -> Self {
        let friendly = shorten(&canonical).to_string();
        let without_origin = if canonical.starts_with(REMOTE_TRACKING_BRANCH_PREFIX) {
            // drop the remote name segment
            match friendly.split_once('/') {
                Some((_, rest)) => rest.to_string(),
                None => friendly.clone(),
            }
        } else {
            friendly
                .strip_prefix(ORIGIN_PREFIX)
                .unwrap_or(&friendly)
                .to_string()
        };

        ReferenceName {
            canonical,
            friendly,
            without_origin,
        }
    }

    /// Full reference name, e.g. `refs/heads/main`
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Reference name with its `refs/...` prefix removed
    pub fn friendly(&self) -> &str {
        &self.friendly
    }

    /// Friendly name with the remote name removed, e.g. `feature/x` for
    /// `refs/remotes/origin/feature/x`
    pub fn without_origin(&self) -> &str {
        &self.without_origin
    }

    pub fn is_local_branch(&self) -> bool {
        self.canonical.starts_with(LOCAL_BRANCH_PREFIX)
    }

    pub fn is_remote_branch(&self) -> bool {
        self.canonical.starts_with(REMOTE_TRACKING_BRANCH_PREFIX)
    }

    pub fn is_tag(&self) -> bool {
        self.canonical.starts_with(TAG_PREFIX)
    }

    pub fn is_pull_request(&self) -> bool {
        PULL_REQUEST_PREFIXES
            .iter()
            .any(|prefix| self.canonical.starts_with(prefix))
    }
}

impl fmt::Display for ReferenceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}

fn has_known_prefix(name: &str) -> bool {
    [LOCAL_BRANCH_PREFIX, REMOTE_TRACKING_BRANCH_PREFIX, TAG_PREFIX]
        .iter()
        .chain(PULL_REQUEST_PREFIXES.iter())
        .any(|prefix| name.starts_with(prefix))
}

fn shorten(canonical: &str) -> &str {
    [LOCAL_BRANCH_PREFIX, REMOTE_TRACKING_BRANCH_PREFIX, TAG_PREFIX]
        .iter()
        .find_map(|prefix| canonical.strip_prefix(prefix))
        .or_else(|| canonical.strip_prefix("refs/"))
        .unwrap_or(canonical)
}
