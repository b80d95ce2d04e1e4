//! Stackgen Core - library behind `create-zenuxs-app`
//!
//! Scaffolds React/Next.js frontends, Express/Fastify backends and
//! full-stack projects that combine one of each.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pure rendering** - a [`Configuration`] is rendered into an
//!   in-memory [`TemplateOutput`] by [`render::render_project`]; no I/O happens here
//! - **Layer 2: Effects** - [`generate_project`] writes the output to disk,
//!   [`runtime`] detects Node.js/npm and runs `npm install`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use stackgen_core::{generate_project, Answers, ProjectName};
//!
//! let answers = Answers::load(Path::new("answers.yaml"))?;
//! let config = answers.resolve(ProjectName::parse("my-app")?);
//! let report = generate_project(&config, Path::new(".")).await?;
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod product;
pub mod render;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Answers, Configuration, ProjectKind, ProjectName, ProjectType};
pub use error::{Result, ScaffoldError};
pub use generate::{generate_project, GenerationReport};
pub use product::ProductConfig;
pub use render::render_project;
pub use runtime::{check_node, check_npm, RuntimeInfo};
pub use templates::{materialize, GeneratedFile, TemplateOutput};

#[cfg(feature = "tui")]
pub use tui::{run, CreateArgs};
