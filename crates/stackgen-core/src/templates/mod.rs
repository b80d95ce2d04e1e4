//! Template sources, output model and materialization
//!
//! This module provides:
//! - The in-memory output model (`TemplateOutput`, `GeneratedFile`, `Document`)
//! - The structured `package.json` model (`PackageManifest`)
//! - The embedded template engine (minijinja over `include_dir` assets)
//! - Materialization of an output onto disk

pub mod engine;
pub mod manifest;
pub mod materializer;
pub mod output;

pub use manifest::PackageManifest;
pub use materializer::materialize;
pub use output::{Chunk, Document, FileContent, GeneratedFile, TemplateOutput};
