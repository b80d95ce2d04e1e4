//! CORS registration block shared by the backend renderers and the
//! full-stack wiring pass

use crate::config::BackendFramework;

/// Name of the block holding the CORS registration in the backend entry point
pub const CORS_BLOCK: &str = "cors";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorsPolicy<'a> {
    /// Any origin, no credentials
    Permissive,
    /// A single origin with credentials enabled. `CORS_ORIGIN` in the
    /// backend environment takes precedence over `origin`.
    Scoped { origin: &'a str },
}

/// Render the CORS registration statement for `framework`
pub fn cors_block(framework: BackendFramework, policy: &CorsPolicy<'_>) -> String {
    let register = match framework {
        BackendFramework::Express => "app.use(cors(",
        BackendFramework::Fastify => "await fastify.register(cors, ",
    };

    match (framework, policy) {
        (BackendFramework::Express, CorsPolicy::Permissive) => "app.use(cors())\n".to_string(),
        (BackendFramework::Fastify, CorsPolicy::Permissive) => {
            "await fastify.register(cors, { origin: '*' })\n".to_string()
        }
        (_, CorsPolicy::Scoped { origin }) => {
            let close = match framework {
                BackendFramework::Express => "))",
                BackendFramework::Fastify => ")",
            };
            format!(
                "{register}{{\n  origin: process.env.CORS_ORIGIN || '{origin}',\n  credentials: true\n}}{close}\n"
            )
        }
    }
}
