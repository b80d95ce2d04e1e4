//! Full-stack composition and the auto-connect wiring pass
//!
//! Both sides are rendered exactly as standalone projects and nested under
//! `frontend/` and `backend/`. Wiring then edits the in-memory tree: it
//! never re-renders a side, so everything it does not touch is identical
//! to the standalone output.

use super::cors::{cors_block, CorsPolicy, CORS_BLOCK};
use super::{docs, render_package, BACKEND_ENTRY};
use crate::config::{Configuration, FrontendFramework, FullStackOptions};
use crate::error::Result;
use crate::templates::{engine, GeneratedFile, TemplateOutput};
use minijinja::context;
use std::path::Path;
use url::Url;

pub const FRONTEND_DIR: &str = "frontend";
pub const BACKEND_DIR: &str = "backend";

/// Where the generated backend listens during development
pub const BACKEND_ORIGIN: &str = "http://localhost:5000";
/// Where both frontend dev servers listen
pub const FRONTEND_ORIGIN: &str = "http://localhost:3000";

const AXIOS: (&str, &str) = ("axios", "^1.6.0");

/// Public environment variable the frontend reads the API URL from
pub fn api_env_var(framework: FrontendFramework) -> &'static str {
    match framework {
        FrontendFramework::React => "VITE_API_URL",
        FrontendFramework::Next => "NEXT_PUBLIC_API_URL",
    }
}

pub fn compose(config: &Configuration, opts: &FullStackOptions) -> Result<TemplateOutput> {
    let (frontend, backend) = opts.sides(&config.project_name, config.install_deps);

    let mut output = render_package(&frontend)?.nest(FRONTEND_DIR);
    output.extend(render_package(&backend)?.nest(BACKEND_DIR))?;

    if opts.auto_connect {
        wire(&mut output, opts)?;
        output.push(docs::deployment(&config.project_name, opts)?)?;
    }

    Ok(output)
}

/// Point the frontend at the API and scope the backend's CORS policy to the frontend
pub fn wire(output: &mut TemplateOutput, opts: &FullStackOptions) -> Result<()> {
    let frontend = Path::new(FRONTEND_DIR);
    let backend = Path::new(BACKEND_DIR);
    let api_url = Url::parse(BACKEND_ORIGIN)?.join("/api")?;
    let env_var = api_env_var(opts.frontend.framework);

    output.push(GeneratedFile::text(
        frontend.join(".env.local"),
        format!("{env_var}={api_url}\n"),
    ))?;

    let env_expr = match opts.frontend.framework {
        FrontendFramework::React => format!("import.meta.env.{env_var}"),
        FrontendFramework::Next => format!("process.env.{env_var}"),
    };
    let script = if opts.frontend.typescript { "ts" } else { "js" };
    output.push(GeneratedFile::text(
        frontend.join(format!("src/utils/api.{script}")),
        engine::render(
            "fullstack/api.js",
            context! {
                env_expr => env_expr,
                api_url => api_url.as_str(),
                typescript => opts.frontend.typescript,
            },
        )?,
    ))?;

    let (name, version) = AXIOS;
    output
        .manifest_mut(frontend.join("package.json"))?
        .dependency(name, version);

    let origin = Url::parse(FRONTEND_ORIGIN)?;
    let origin = origin.origin().ascii_serialization();
    output.replace_block(
        backend.join(BACKEND_ENTRY),
        CORS_BLOCK,
        &cors_block(
            opts.backend.framework,
            &CorsPolicy::Scoped { origin: &origin },
        ),
    )?;

    Ok(())
}
