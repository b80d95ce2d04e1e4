//! Express backend

use super::{assemble, backend_context, features, server_entry};
use crate::config::{BackendFramework, BackendOptions, ProjectName};
use crate::error::Result;
use crate::templates::{engine, GeneratedFile, PackageManifest, TemplateOutput};

const DEPENDENCIES: &[(&str, &str)] = &[
    ("express", "^4.18.0"),
    ("cors", "^2.8.5"),
    ("dotenv", "^16.0.0"),
    ("helmet", "^7.0.0"),
    ("compression", "^1.7.0"),
    ("morgan", "^1.10.0"),
];

const DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("nodemon", "^3.0.0"),
    ("jest", "^29.0.0"),
    ("supertest", "^6.3.0"),
];

pub fn render(name: &ProjectName, opts: &BackendOptions) -> Result<TemplateOutput> {
    let ctx = backend_context(name, opts);

    let manifest = PackageManifest::new(name.identifier(), "1.0.0")
        .es_module()
        .script("start", "node server.js")
        .script("dev", "nodemon server.js")
        .script("test", "jest --passWithNoTests")
        .with_dependencies(DEPENDENCIES)
        .with_dev_dependencies(DEV_DEPENDENCIES);

    let env = engine::render("express/env", &ctx)?;

    let base = vec![
        server_entry(BackendFramework::Express, &ctx)?,
        GeneratedFile::text(".env", env.clone()),
        GeneratedFile::text(".env.example", env),
        GeneratedFile::text(".gitignore", engine::raw("shared/gitignore")?),
        GeneratedFile::text(
            "src/controllers/example.controller.js",
            engine::raw("express/src/controllers/example.controller.js")?,
        ),
        GeneratedFile::text(
            "src/routes/example.routes.js",
            engine::render("express/src/routes/example.routes.js", &ctx)?,
        ),
        GeneratedFile::text(
            "src/middlewares/errorHandler.js",
            engine::raw("express/src/middlewares/errorHandler.js")?,
        ),
        GeneratedFile::text(
            "src/utils/apiResponse.js",
            engine::raw("express/src/utils/apiResponse.js")?,
        ),
    ];

    assemble(manifest, base, features::backend_fragments(name, opts)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Database;
    use crate::render::cors::CORS_BLOCK;
    use crate::templates::FileContent;

    fn options() -> BackendOptions {
        BackendOptions {
            framework: BackendFramework::Express,
            database: Database::MongoDb,
            easy_mongoo: true,
            auth: true,
            logger: true,
            rate_limiter: false,
            swagger: false,
        }
    }

    fn demo() -> ProjectName {
        ProjectName::parse("demo").unwrap()
    }

    fn manifest(output: &TemplateOutput) -> &PackageManifest {
        match &output.get("package.json").unwrap().content {
            FileContent::Manifest(manifest) => manifest,
            other => panic!("package.json is not a manifest: {other:?}"),
        }
    }

    #[test]
    fn test_mongodb_auth_logger_scenario() {
        let output = render(&demo(), &options()).unwrap();

        let manifest = manifest(&output);
        let mut names: Vec<&str> = manifest.dependencies.keys().map(String::as_str).collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "bcrypt",
                "compression",
                "cors",
                "dotenv",
                "easy-mongoo",
                "express",
                "express-validator",
                "helmet",
                "jsonwebtoken",
                "morgan",
                "winston",
            ]
        );

        for path in [
            "src/middlewares/auth.middleware.js",
            "src/routes/auth.routes.js",
            "src/config/database.js",
            "src/utils/logger.js",
        ] {
            assert!(output.contains(path), "{path} missing");
        }
        assert!(!output.contains("src/middlewares/rateLimiter.js"));
        assert!(!output
            .paths()
            .any(|p| p.to_string_lossy().contains("swagger")));
    }

    #[test]
    fn test_package_name_uses_identifier() {
        let name = ProjectName::parse("My Api").unwrap();
        let output = render(&name, &options()).unwrap();
        assert_eq!(manifest(&output).name, "my_api");
        assert_eq!(manifest(&output).module_type, Some("module"));
    }

    #[test]
    fn test_server_entry_wires_enabled_features() {
        let mut opts = options();
        opts.rate_limiter = true;
        opts.swagger = true;
        let output = render(&demo(), &opts).unwrap();

        let server = output.get("server.js").unwrap().contents().unwrap();
        assert!(server.contains("import rateLimiter from './src/middlewares/rateLimiter.js'"));
        assert!(server.contains("swaggerSetup(app)"));
        assert!(server.contains("app.use('/api/auth', authRoutes)"));
        assert!(server.contains("app.use(cors())\n"));

        let FileContent::Text(document) = &output.get("server.js").unwrap().content else {
            panic!("server.js should be a text document");
        };
        assert_eq!(document.block_body(CORS_BLOCK), Some("app.use(cors())\n"));
    }

    #[test]
    fn test_disabled_features_leave_no_imports() {
        let opts = BackendOptions {
            auth: false,
            logger: false,
            ..options()
        };
        let output = render(&demo(), &opts).unwrap();

        let server = output.get("server.js").unwrap().contents().unwrap();
        assert!(!server.contains("authRoutes"));
        assert!(!server.contains("logger"));
        assert!(server.contains("const log = console"));
        assert!(!output.contains("logs/.gitkeep"));

        let routes = output
            .get("src/routes/example.routes.js")
            .unwrap()
            .contents()
            .unwrap();
        assert!(!routes.contains("authenticateToken"));
    }

    #[test]
    fn test_env_files_name_the_database() {
        let opts = BackendOptions {
            database: Database::MySql,
            easy_mongoo: false,
            ..options()
        };
        let output = render(&ProjectName::parse("Shop Front").unwrap(), &opts).unwrap();

        let env = output.get(".env").unwrap().contents().unwrap();
        assert!(env.contains("MYSQL_DATABASE=shop_front"));
        assert!(!env.contains("MONGODB_URI"));
        assert_eq!(Some(env), output.get(".env.example").unwrap().contents());
    }
}
