//! Validated project names

use crate::error::{Result, ScaffoldError};
use std::fmt;

/// Characters rejected by Windows or unsafe inside the generated JS/JSX string literals
const FORBIDDEN_CHARS: &[char] = &[
    '/', '\\', '<', '>', ':', '"', '|', '?', '*', '\'', '`', '{', '}',
];

/// Device names Windows refuses as file or directory names
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

const MAX_LEN: usize = 214;

/// A project name that is safe to use as a single directory name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |reason| ScaffoldError::InvalidProjectName {
            name: raw.to_string(),
            reason,
        };

        if raw.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if raw.trim() != raw {
            return Err(invalid("name must not start or end with whitespace"));
        }
        if raw.len() > MAX_LEN {
            return Err(invalid("name is too long"));
        }
        if raw == "." || raw == ".." {
            return Err(invalid("name must not be a relative path"));
        }
        if raw.ends_with('.') {
            return Err(invalid("name must not end with a dot"));
        }
        if raw.chars().any(|c| c.is_control()) {
            return Err(invalid("name must not contain control characters"));
        }
        if raw.contains(FORBIDDEN_CHARS) {
            return Err(invalid(
                "name must not contain path separators, quotes, braces or any of <>:|?*",
            ));
        }

        let stem = raw.split('.').next().unwrap_or(raw);
        if RESERVED_NAMES
            .iter()
            .any(|reserved| stem.eq_ignore_ascii_case(reserved))
        {
            return Err(invalid("name is reserved by the operating system"));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased name with whitespace runs collapsed to `_`.
    ///
    /// Used for the package name in `package.json` and for database names;
    /// every derived identifier goes through here.
    pub fn identifier(&self) -> String {
        self.0
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase()
    }

    /// Name of a full-stack side, e.g. `demo-frontend`
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self(format!("{}{}", self.0, suffix))
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
