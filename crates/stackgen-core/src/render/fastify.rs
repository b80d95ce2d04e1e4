//! Fastify backend

use super::{assemble, backend_context, features, server_entry};
use crate::config::{BackendFramework, BackendOptions, ProjectName};
use crate::error::Result;
use crate::templates::{engine, GeneratedFile, PackageManifest, TemplateOutput};

const DEPENDENCIES: &[(&str, &str)] = &[
    ("fastify", "^4.0.0"),
    ("@fastify/cors", "^8.0.0"),
    ("@fastify/helmet", "^11.0.0"),
    ("@fastify/compress", "^6.0.0"),
    ("fastify-plugin", "^4.0.0"),
    ("dotenv", "^16.0.0"),
];

pub fn render(name: &ProjectName, opts: &BackendOptions) -> Result<TemplateOutput> {
    let ctx = backend_context(name, opts);

    let manifest = PackageManifest::new(name.identifier(), "1.0.0")
        .es_module()
        .script("start", "node server.js")
        .script("dev", "nodemon server.js")
        .with_dependencies(DEPENDENCIES)
        .with_dev_dependencies(&[("nodemon", "^3.0.0")]);

    let env = engine::render("fastify/env", &ctx)?;

    let base = vec![
        server_entry(BackendFramework::Fastify, &ctx)?,
        GeneratedFile::text(".env", env.clone()),
        GeneratedFile::text(".env.example", env),
        GeneratedFile::text(".gitignore", engine::raw("shared/gitignore")?),
        GeneratedFile::text(
            "src/routes/example.routes.js",
            engine::render("fastify/src/routes/example.routes.js", &ctx)?,
        ),
    ];

    assemble(manifest, base, features::backend_fragments(name, opts)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Database;

    fn options(database: Database) -> BackendOptions {
        BackendOptions {
            framework: BackendFramework::Fastify,
            database,
            easy_mongoo: false,
            auth: false,
            logger: false,
            rate_limiter: false,
            swagger: false,
        }
    }

    #[test]
    fn test_minimal_fastify_project() {
        let name = ProjectName::parse("demo").unwrap();
        let output = render(&name, &options(Database::Postgres)).unwrap();

        let paths: Vec<String> = output
            .paths()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            paths,
            vec![
                "package.json",
                "server.js",
                ".env",
                ".env.example",
                ".gitignore",
                "src/routes/example.routes.js",
                "src/plugins/database.js",
            ]
        );

        let manifest = output.get("package.json").unwrap().contents().unwrap();
        assert!(manifest.contains("\"@fastify/postgres\""));
        assert!(manifest.contains("\"fastify-plugin\""));

        let server = output.get("server.js").unwrap().contents().unwrap();
        assert!(server.contains("logger: true"));
        assert!(server.contains("await fastify.register(cors, { origin: '*' })\n"));
        assert!(!server.contains("authRoutes"));
    }

    #[test]
    fn test_plugins_registered_when_enabled() {
        let name = ProjectName::parse("demo").unwrap();
        let opts = BackendOptions {
            auth: true,
            logger: true,
            rate_limiter: true,
            swagger: true,
            ..options(Database::MongoDb)
        };
        let output = render(&name, &opts).unwrap();

        for path in [
            "src/plugins/auth.js",
            "src/routes/auth.routes.js",
            "src/plugins/logger.js",
            "src/plugins/rateLimit.js",
            "src/plugins/swagger.js",
        ] {
            assert!(output.contains(path), "{path} missing");
        }

        let server = output.get("server.js").unwrap().contents().unwrap();
        assert!(server.contains("logger: loggerOptions"));
        assert!(server.contains("await fastify.register(authRoutes, { prefix: '/api/auth' })"));
        assert!(server.contains("await fastify.register(rateLimit)"));

        let routes = output
            .get("src/routes/example.routes.js")
            .unwrap()
            .contents()
            .unwrap();
        assert!(routes.contains("preHandler: [fastify.authenticate]"));
    }

    #[test]
    fn test_env_uses_connection_urls() {
        let name = ProjectName::parse("demo").unwrap();
        let output = render(&name, &options(Database::MySql)).unwrap();
        let env = output.get(".env").unwrap().contents().unwrap();
        assert!(env.contains("MYSQL_URL=mysql://root@localhost:3306/demo"));
    }
}
