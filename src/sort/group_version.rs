use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// `group` is empty for the core group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupVersion {
    pub group: String,
    pub version: String,
}

impl GroupVersion {
    pub fn new<G: Into<String>, V: Into<String>>(group: G, version: V) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
        }
    }

    pub fn core<V: Into<String>>(version: V) -> Self {
        Self::new("", version)
    }

    pub fn is_core(&self) -> bool {
        self.group.is_empty()
    }
}

impl fmt::Display for GroupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_core() {
            write!(f, "{}", self.version)
        } else {
            write!(f, "{}/{}", self.group, self.version)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseGroupVersionError {
    #[error("Empty group version")]
    Empty,
    #[error("Missing version in \"{}\"", _0)]
    MissingVersion(String),
    #[error("Too many '/' in \"{}\"", _0)]
    TooManySeparators(String),
}

impl FromStr for GroupVersion {
    type Err = ParseGroupVersionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseGroupVersionError::Empty);
        }
        let mut parts = s.splitn(3, '/');
        let gv = match (parts.next(), parts.next(), parts.next()) {
            (Some(version), None, None) => GroupVersion::core(version),
            (Some(group), Some(version), None) => GroupVersion::new(group, version),
            _ => return Err(ParseGroupVersionError::TooManySeparators(s.to_string())),
        };
        if gv.version.is_empty() {
            return Err(ParseGroupVersionError::MissingVersion(s.to_string()));
        }
        Ok(gv)
    }
}
