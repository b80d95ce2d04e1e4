//! Structured logging for the generated server

use crate::config::{BackendFramework, ProjectName};
use crate::error::Result;
use crate::render::Fragment;
use crate::templates::engine;
use crate::templates::GeneratedFile;
use minijinja::context;

pub fn render(framework: BackendFramework, name: &ProjectName) -> Result<Fragment> {
    match framework {
        BackendFramework::Express => Ok(Fragment::new()
            .dependency("winston", "^3.0.0")
            .file(GeneratedFile::text(
                "src/utils/logger.js",
                engine::render(
                    "express/logger/logger.js",
                    context! { name => name.as_str() },
                )?,
            ))
            .file(GeneratedFile::text("logs/.gitkeep", ""))),
        // Fastify logs through pino already; this only pretty-prints in development
        BackendFramework::Fastify => Ok(Fragment::new()
            .dependency("pino-pretty", "^10.0.0")
            .file(GeneratedFile::text(
                "src/plugins/logger.js",
                engine::raw("fastify/logger/logger.js")?,
            ))),
    }
}
