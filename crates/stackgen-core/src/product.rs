//! Product configuration trait for CLI binaries
//!
//! The scaffolding flow is product-agnostic; a binary supplies its identity,
//! help text and post-generation guidance through [`ProductConfig`].

use crate::config::Configuration;
use std::path::Path;

/// Configuration trait for a scaffolding product
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (the command users type)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    fn version(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// `(label, url)` pairs printed after a successful run
    fn docs_links(&self) -> &'static [(&'static str, &'static str)];

    /// The "next steps" shown once the project at `root` has been created
    fn next_steps(&self, config: &Configuration, root: &Path) -> Vec<String>;
}
