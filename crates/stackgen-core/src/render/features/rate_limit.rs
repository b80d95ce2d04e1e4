//! Per-IP request rate limiting

use crate::config::BackendFramework;
use crate::error::Result;
use crate::render::Fragment;
use crate::templates::engine;
use crate::templates::GeneratedFile;

pub fn render(framework: BackendFramework) -> Result<Fragment> {
    let (dependency, version, path, template) = match framework {
        BackendFramework::Express => (
            "express-rate-limit",
            "^6.0.0",
            "src/middlewares/rateLimiter.js",
            "express/rate-limit/rateLimiter.js",
        ),
        BackendFramework::Fastify => (
            "@fastify/rate-limit",
            "^8.0.0",
            "src/plugins/rateLimit.js",
            "fastify/rate-limit/rateLimit.js",
        ),
    };

    Ok(Fragment::new()
        .dependency(dependency, version)
        .file(GeneratedFile::text(path, engine::raw(template)?)))
}
