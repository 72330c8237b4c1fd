use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammar accepted when parsing a version from text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SemanticVersionFormat {
    /// SemVer 2.0: exactly `major.minor.patch`, no leading zeros
    #[default]
    Strict,
    /// `major[.minor[.patch[.revision]]]`, missing parts default to zero
    Loose,
}

/// Semantic version representation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub revision: Option<u64>,
    pub pre_release: Option<String>,
    pub build_metadata: Option<String>,
}

impl SemanticVersion {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            revision: None,
            pre_release: None,
            build_metadata: None,
        }
    }

    /// Try to parse a version from arbitrary text.
    ///
    /// `prefix` is removed literally when the text starts with it. Text that is
    /// not a version under `format` yields `None`; this never fails otherwise.
    pub fn try_parse(
        text: &str,
        prefix: Option<&str>,
        format: SemanticVersionFormat,
    ) -> Option<Self> {
        let text = match prefix {
            Some(prefix) => text.strip_prefix(prefix).unwrap_or(text),
            None => text,
        };

        match format {
            SemanticVersionFormat::Strict => parse_strict(text),
            SemanticVersionFormat::Loose => parse_loose(text),
        }
    }
}

fn parse_strict(text: &str) -> Option<SemanticVersion> {
    let parsed = semver::Version::parse(text).ok()?;
    Some(SemanticVersion {
        major: parsed.major,
        minor: parsed.minor,
        patch: parsed.patch,
        revision: None,
        pre_release: non_empty(parsed.pre.as_str()),
        build_metadata: non_empty(parsed.build.as_str()),
    })
}

fn parse_loose(text: &str) -> Option<SemanticVersion> {
    let (rest, build_metadata) = match text.split_once('+') {
        Some((rest, build)) => (rest, Some(build.to_string())),
        None => (text, None),
    };
    let (numbers, pre_release) = match rest.split_once('-') {
        Some((numbers, pre)) => (numbers, Some(pre.to_string())),
        None => (rest, None),
    };

    let parts = numbers
        .split('.')
        .map(parse_number)
        .collect::<Option<Vec<u64>>>()?;
    if parts.is_empty() || parts.len() > 4 {
        return None;
    }

    Some(SemanticVersion {
        major: parts[0],
        minor: parts.get(1).copied().unwrap_or(0),
        patch: parts.get(2).copied().unwrap_or(0),
        revision: parts.get(3).copied(),
        pre_release,
        build_metadata,
    })
}

fn parse_number(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(revision) = self.revision {
            write!(f, ".{}", revision)?;
        }
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build_metadata {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}
