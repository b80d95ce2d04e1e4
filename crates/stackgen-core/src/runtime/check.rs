//! Detection of the Node.js toolchain used to install generated projects

use semver::Version;
use std::process::Command;

/// Oldest Node.js release the generated projects are tested against
pub const MIN_NODE_VERSION: &str = "18.0.0";

/// Runtime detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    fn probe(name: &'static str, program: &str) -> Self {
        let output = Command::new(program).arg("--version").output();

        match output {
            Ok(out) if out.status.success() => RuntimeInfo {
                name,
                version: Some(String::from_utf8_lossy(&out.stdout).trim().to_string()),
                available: true,
            },
            _ => RuntimeInfo {
                name,
                version: None,
                available: false,
            },
        }
    }
}

/// Program name for npm; Windows ships it as a `.cmd` shim
pub fn npm_program() -> &'static str {
    if cfg!(windows) {
        "npm.cmd"
    } else {
        "npm"
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    RuntimeInfo::probe("Node.js", "node")
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    RuntimeInfo::probe("npm", npm_program())
}

/// Parse `node --version` output such as `v20.11.1`
pub fn parse_version(raw: &str) -> Option<Version> {
    let raw = raw.trim();
    Version::parse(raw.strip_prefix('v').unwrap_or(raw)).ok()
}

/// Warning to show when the installed Node.js is older than supported.
///
/// Unparseable versions produce no warning; the install step will surface
/// any real incompatibility.
pub fn node_version_warning(installed: &str) -> Option<String> {
    let installed_version = parse_version(installed)?;
    let minimum = parse_version(MIN_NODE_VERSION)?;

    (installed_version < minimum).then(|| {
        format!(
            "Node.js {} detected; version {} or newer is recommended",
            installed.trim(),
            MIN_NODE_VERSION
        )
    })
}
