//! Node.js toolchain detection and dependency installation

pub mod check;
pub mod install;

pub use check::{
    check_node, check_npm, node_version_warning, parse_version, RuntimeInfo, MIN_NODE_VERSION,
};
pub use install::npm_install;
