//! OpenAPI documentation served at `/api-docs`

use crate::config::{BackendFramework, ProjectName};
use crate::error::Result;
use crate::render::Fragment;
use crate::templates::engine;
use crate::templates::GeneratedFile;
use minijinja::context;

pub fn render(framework: BackendFramework, name: &ProjectName) -> Result<Fragment> {
    let ctx = context! { name => name.as_str() };

    let fragment = match framework {
        BackendFramework::Express => Fragment::new()
            .dependency("swagger-ui-express", "^5.0.0")
            .dependency("swagger-jsdoc", "^6.0.0")
            .file(GeneratedFile::text(
                "src/config/swagger.js",
                engine::render("express/swagger/swagger.js", ctx)?,
            )),
        BackendFramework::Fastify => Fragment::new()
            .dependency("@fastify/swagger", "^8.0.0")
            .dependency("@fastify/swagger-ui", "^1.0.0")
            .file(GeneratedFile::text(
                "src/plugins/swagger.js",
                engine::render("fastify/swagger/swagger.js", ctx)?,
            )),
    };

    Ok(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_uses_project_name() {
        let name = ProjectName::parse("Shop API").unwrap();
        for framework in [BackendFramework::Express, BackendFramework::Fastify] {
            let fragment = render(framework, &name).unwrap();
            assert!(fragment.files[0]
                .contents()
                .unwrap()
                .contains("title: 'Shop API API'"));
        }
    }
}
