//! JWT authentication

use crate::config::{BackendFramework, Database};
use crate::error::Result;
use crate::render::Fragment;
use crate::templates::engine;
use crate::templates::GeneratedFile;
use minijinja::context;

pub fn render(framework: BackendFramework, database: Database) -> Result<Fragment> {
    match framework {
        BackendFramework::Express => express(database),
        BackendFramework::Fastify => fastify(),
    }
}

fn express(database: Database) -> Result<Fragment> {
    // Sequelize models query with `where` clauses instead of Mongo filters
    let ctx = context! { sql => database != Database::MongoDb };

    Ok(Fragment::new()
        .dependency("bcrypt", "^5.0.0")
        .dependency("jsonwebtoken", "^9.0.0")
        .dependency("express-validator", "^7.0.0")
        .file(GeneratedFile::text(
            "src/controllers/auth.controller.js",
            engine::render("express/auth/auth.controller.js", &ctx)?,
        ))
        .file(GeneratedFile::text(
            "src/middlewares/auth.middleware.js",
            engine::render("express/auth/auth.middleware.js", &ctx)?,
        ))
        .file(GeneratedFile::text(
            "src/routes/auth.routes.js",
            engine::raw("express/auth/auth.routes.js")?,
        ))
        .file(GeneratedFile::text(
            "src/validators/auth.validators.js",
            engine::raw("express/auth/auth.validators.js")?,
        ))
        .file(GeneratedFile::text(
            "src/utils/validation.js",
            engine::raw("express/auth/validation.js")?,
        )))
}

fn fastify() -> Result<Fragment> {
    Ok(Fragment::new()
        .dependency("@fastify/jwt", "^7.0.0")
        .dependency("bcrypt", "^5.0.0")
        .file(GeneratedFile::text(
            "src/plugins/auth.js",
            engine::raw("fastify/auth/auth.js")?,
        ))
        .file(GeneratedFile::text(
            "src/routes/auth.routes.js",
            engine::raw("fastify/auth/auth.routes.js")?,
        )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::features::{dependency_names, paths};

    #[test]
    fn test_express_auth_files() {
        let fragment = render(BackendFramework::Express, Database::MongoDb).unwrap();
        assert_eq!(
            dependency_names(&fragment),
            vec!["bcrypt", "jsonwebtoken", "express-validator"]
        );
        assert!(paths(&fragment).contains(&"src/middlewares/auth.middleware.js"));
        assert!(paths(&fragment).contains(&"src/routes/auth.routes.js"));
    }

    #[test]
    fn test_controller_query_style_follows_database() {
        let controller = |database| {
            render(BackendFramework::Express, database).unwrap().files[0]
                .contents()
                .unwrap()
        };

        let mongo = controller(Database::MongoDb);
        assert!(mongo.contains("$or: [{ email }, { username }]"));
        assert!(!mongo.contains("sequelize"));

        let postgres = controller(Database::Postgres);
        assert!(postgres.contains("import { Op } from 'sequelize'"));
        assert!(postgres.contains("User.findByPk"));
    }

    #[test]
    fn test_fastify_auth_plugin() {
        let fragment = render(BackendFramework::Fastify, Database::MySql).unwrap();
        assert_eq!(dependency_names(&fragment), vec!["@fastify/jwt", "bcrypt"]);
        assert_eq!(
            paths(&fragment),
            vec!["src/plugins/auth.js", "src/routes/auth.routes.js"]
        );
    }
}
