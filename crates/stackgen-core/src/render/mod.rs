//! Renderers: configuration in, in-memory file tree out
//!
//! Every function here is pure. The dispatcher picks a renderer from the
//! project kind and framework; full-stack projects are composed from two
//! standalone renders by [`fullstack::compose`].

pub mod cors;
pub mod docs;
pub mod express;
pub mod fastify;
pub mod features;
pub mod fullstack;
pub mod next;
pub mod react;

use crate::config::{
    BackendFramework, BackendOptions, Configuration, FrontendFramework, FrontendOptions,
    ProjectKind, ProjectName,
};
use crate::error::Result;
use crate::templates::{engine, Document, GeneratedFile, PackageManifest, TemplateOutput};
use cors::{cors_block, CorsPolicy, CORS_BLOCK};
use minijinja::{context, Value};

/// Name of the backend entry point, relative to the backend package
pub const BACKEND_ENTRY: &str = "server.js";

/// Files and manifest entries contributed by one optional capability
#[derive(Debug, Default)]
pub struct Fragment {
    pub files: Vec<GeneratedFile>,
    pub dependencies: Vec<(&'static str, &'static str)>,
    pub dev_dependencies: Vec<(&'static str, &'static str)>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, file: GeneratedFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn dependency(mut self, name: &'static str, version: &'static str) -> Self {
        self.dependencies.push((name, version));
        self
    }

    pub fn dev_dependency(mut self, name: &'static str, version: &'static str) -> Self {
        self.dev_dependencies.push((name, version));
        self
    }
}

/// Merge fragments into a manifest and a file list.
///
/// The manifest is written first so it precedes the sources in the output.
pub fn assemble(
    mut manifest: PackageManifest,
    base: Vec<GeneratedFile>,
    fragments: impl IntoIterator<Item = Fragment>,
) -> Result<TemplateOutput> {
    let mut files = base;
    for fragment in fragments {
        for (name, version) in fragment.dependencies {
            manifest.dependency(name, version);
        }
        for (name, version) in fragment.dev_dependencies {
            manifest.dev_dependency(name, version);
        }
        files.extend(fragment.files);
    }

    let mut output = TemplateOutput::new();
    output.push(GeneratedFile::manifest("package.json", manifest))?;
    for file in files {
        output.push(file)?;
    }
    Ok(output)
}

/// Template context shared by the backend entry point and env files
fn backend_context(name: &ProjectName, opts: &BackendOptions) -> Value {
    context! {
        name => name.as_str(),
        package => name.identifier(),
        database => opts.database.key(),
        auth => opts.auth,
        logger => opts.logger,
        rate_limiter => opts.rate_limiter,
        swagger => opts.swagger,
    }
}

/// `server.js` with the CORS registration kept as a replaceable block
fn server_entry(framework: BackendFramework, ctx: &Value) -> Result<GeneratedFile> {
    let dir = match framework {
        BackendFramework::Express => "express",
        BackendFramework::Fastify => "fastify",
    };

    let document = Document::new()
        .text(engine::render(&format!("{dir}/server.head.js"), ctx)?)
        .block(CORS_BLOCK, cors_block(framework, &CorsPolicy::Permissive))
        .text(engine::render(&format!("{dir}/server.tail.js"), ctx)?);

    Ok(GeneratedFile::document(BACKEND_ENTRY, document))
}

pub fn render_frontend(name: &ProjectName, opts: &FrontendOptions) -> Result<TemplateOutput> {
    match opts.framework {
        FrontendFramework::React => react::render(name, opts),
        FrontendFramework::Next => next::render(name, opts),
    }
}

pub fn render_backend(name: &ProjectName, opts: &BackendOptions) -> Result<TemplateOutput> {
    match opts.framework {
        BackendFramework::Express => express::render(name, opts),
        BackendFramework::Fastify => fastify::render(name, opts),
    }
}

/// Render one package (or both, for full-stack) without the project README
pub fn render_package(config: &Configuration) -> Result<TemplateOutput> {
    match &config.kind {
        ProjectKind::Frontend(opts) => render_frontend(&config.project_name, opts),
        ProjectKind::Backend(opts) => render_backend(&config.project_name, opts),
        ProjectKind::FullStack(opts) => fullstack::compose(config, opts),
    }
}

/// Render the complete project tree for a configuration
pub fn render_project(config: &Configuration) -> Result<TemplateOutput> {
    let mut output = render_package(config)?;
    output.push(docs::readme(config)?)?;
    Ok(output)
}


#[cfg(test)]
mod tests {
    use super::test_support::{configure, text};
    use super::*;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    const EVERYTHING: &str = "project_type: backend\nbackend:\n  auth: true\n  logger: true\n  rate_limiter: true\n  swagger: true\n";

    fn file_map(output: &TemplateOutput) -> BTreeMap<PathBuf, Vec<u8>> {
        output
            .files()
            .iter()
            .map(|f| (f.path.clone(), f.bytes().unwrap().into_owned()))
            .collect()
    }

    #[test]
    fn test_render_is_deterministic() {
        for yaml in [
            "project_type: frontend\n",
            "project_type: frontend\nfrontend:\n  framework: next\n",
            EVERYTHING,
            "project_type: backend\nbackend:\n  framework: fastify\n",
            "project_type: fullstack\n",
        ] {
            let config = configure(yaml);
            assert_eq!(render_project(&config).unwrap(), render_project(&config).unwrap());
        }
    }

    #[test]
    fn test_every_mode_gets_a_readme_at_the_root() {
        for yaml in ["project_type: frontend\n", "project_type: backend\n", "project_type: fullstack\n"] {
            let output = render_project(&configure(yaml)).unwrap();
            assert!(text(&output, "README.md").contains("# demo"));
        }
    }

    #[test]
    fn test_dispatch_by_framework() {
        let react = render_project(&configure("project_type: frontend\n")).unwrap();
        assert!(react.contains("vite.config.ts"));

        let next = render_project(&configure(
            "project_type: frontend\nfrontend:\n  framework: next\n",
        ))
        .unwrap();
        assert!(next.contains("next.config.mjs"));

        let fastify = render_project(&configure(
            "project_type: backend\nbackend:\n  framework: fastify\n",
        ))
        .unwrap();
        assert!(text(&fastify, "package.json").contains("\"fastify\""));
    }

    #[test]
    fn test_toggling_logger_leaves_swagger_files_alone() {
        let with_logger = render_project(&configure(EVERYTHING)).unwrap();
        let without_logger =
            render_project(&configure(&EVERYTHING.replace("logger: true", "logger: false")))
                .unwrap();

        assert_eq!(
            text(&with_logger, "src/config/swagger.js"),
            text(&without_logger, "src/config/swagger.js")
        );
        assert_eq!(
            text(&with_logger, "src/middlewares/rateLimiter.js"),
            text(&without_logger, "src/middlewares/rateLimiter.js")
        );
        assert!(with_logger.contains("src/utils/logger.js"));
        assert!(!without_logger.contains("src/utils/logger.js"));
    }

    #[test]
    fn test_toggling_swagger_leaves_other_feature_files_alone() {
        let with_swagger = file_map(&render_project(&configure(EVERYTHING)).unwrap());
        let without_swagger = file_map(
            &render_project(&configure(&EVERYTHING.replace("swagger: true", "swagger: false")))
                .unwrap(),
        );

        for path in [
            "src/utils/logger.js",
            "src/middlewares/rateLimiter.js",
            "src/middlewares/auth.middleware.js",
            "src/routes/auth.routes.js",
            "src/config/database.js",
        ] {
            let path = PathBuf::from(path);
            assert_eq!(with_swagger.get(&path), without_swagger.get(&path), "{}", path.display());
        }
        assert!(!without_swagger.contains_key(&PathBuf::from("src/config/swagger.js")));
    }

    #[test]
    fn test_fastify_plugins_are_independent_of_each_other() {
        let everything = EVERYTHING.replace("backend:\n", "backend:\n  framework: fastify\n");
        let all = file_map(&render_project(&configure(&everything)).unwrap());
        let plugins = |map: &BTreeMap<PathBuf, Vec<u8>>, skip: &str| -> BTreeMap<PathBuf, Vec<u8>> {
            map.iter()
                .filter(|(path, _)| path.starts_with("src/plugins") && !path.ends_with(skip))
                .map(|(path, bytes)| (path.clone(), bytes.clone()))
                .collect()
        };

        for (flag, plugin) in [("logger", "logger.js"), ("swagger", "swagger.js")] {
            let toggled = file_map(
                &render_project(&configure(
                    &everything.replace(&format!("{flag}: true"), &format!("{flag}: false")),
                ))
                .unwrap(),
            );

            assert!(all.contains_key(&PathBuf::from("src/plugins").join(plugin)));
            assert!(!toggled.contains_key(&PathBuf::from("src/plugins").join(plugin)));
            assert_eq!(plugins(&all, plugin), plugins(&toggled, plugin), "toggling {flag}");
            assert_eq!(
                all.get(&PathBuf::from("src/routes/auth.routes.js")),
                toggled.get(&PathBuf::from("src/routes/auth.routes.js"))
            );
        }
    }
}
