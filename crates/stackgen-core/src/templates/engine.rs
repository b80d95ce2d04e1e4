//! Embedded template sources and the minijinja environment that renders them

use crate::error::{Result, ScaffoldError};
use include_dir::{include_dir, Dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;
use std::sync::OnceLock;

static TEMPLATES_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/templates");

fn environment() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        // Generated sources are not HTML documents
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_loader(|name| {
            Ok(TEMPLATES_DIR
                .get_file(name)
                .and_then(|file| file.contents_utf8())
                .map(str::to_owned))
        });
        env
    })
}

/// Render an embedded template with the given context
pub fn render<S: Serialize>(name: &str, ctx: S) -> Result<String> {
    let template = environment().get_template(name).map_err(|source| {
        if matches!(source.kind(), minijinja::ErrorKind::TemplateNotFound) {
            ScaffoldError::TemplateNotFound(name.to_string())
        } else {
            ScaffoldError::Template {
                name: name.to_string(),
                source,
            }
        }
    })?;

    template.render(ctx).map_err(|source| ScaffoldError::Template {
        name: name.to_string(),
        source,
    })
}

/// Raw embedded text, for assets that need no interpolation
pub fn raw(name: &str) -> Result<&'static str> {
    TEMPLATES_DIR
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| ScaffoldError::TemplateNotFound(name.to_string()))
}

/// Raw embedded bytes, for binary assets
pub fn raw_bytes(name: &str) -> Result<&'static [u8]> {
    TEMPLATES_DIR
        .get_file(name)
        .map(|file| file.contents())
        .ok_or_else(|| ScaffoldError::TemplateNotFound(name.to_string()))
}
