//! Database connection and user model

use crate::config::{BackendFramework, Database, ProjectName};
use crate::error::Result;
use crate::render::Fragment;
use crate::templates::engine;
use crate::templates::GeneratedFile;
use minijinja::context;

const EXPRESS_CONFIG: &str = "src/config/database.js";
const EXPRESS_MODEL: &str = "src/models/User.js";
const FASTIFY_PLUGIN: &str = "src/plugins/database.js";

pub fn render(
    framework: BackendFramework,
    name: &ProjectName,
    database: Database,
    easy_mongoo: bool,
) -> Result<Fragment> {
    match framework {
        BackendFramework::Express => express(name, database, easy_mongoo),
        BackendFramework::Fastify => fastify(database, easy_mongoo),
    }
}

fn express(name: &ProjectName, database: Database, easy_mongoo: bool) -> Result<Fragment> {
    let with_files = |fragment: Fragment, dir: &str| -> Result<Fragment> {
        Ok(fragment
            .file(GeneratedFile::text(
                EXPRESS_CONFIG,
                engine::raw(&format!("express/database/{dir}/database.js"))?,
            ))
            .file(GeneratedFile::text(
                EXPRESS_MODEL,
                engine::raw(&format!("express/database/{dir}/User.js"))?,
            )))
    };

    match database {
        Database::MongoDb if easy_mongoo => {
            with_files(Fragment::new().dependency("easy-mongoo", "^1.0.0"), "easy-mongoo")
        }
        Database::MongoDb => with_files(Fragment::new().dependency("mongoose", "^7.0.0"), "mongoose"),
        Database::MySql | Database::Postgres => sequelize(name, database),
    }
}

fn sequelize(name: &ProjectName, database: Database) -> Result<Fragment> {
    let (driver, env_prefix, port) = match database {
        Database::Postgres => (
            Fragment::new()
                .dependency("pg", "^8.0.0")
                .dependency("pg-hstore", "^2.3.0"),
            "POSTGRES",
            5432,
        ),
        _ => (Fragment::new().dependency("mysql2", "^3.0.0"), "MYSQL", 3306),
    };

    let ctx = context! {
        package => name.identifier(),
        env_prefix => env_prefix,
        port => port,
        dialect => database.key(),
        label => database.to_string(),
    };

    Ok(driver
        .dependency("sequelize", "^6.0.0")
        .file(GeneratedFile::text(
            EXPRESS_CONFIG,
            engine::render("express/database/sequelize/database.js", ctx)?,
        ))
        .file(GeneratedFile::text(
            EXPRESS_MODEL,
            engine::raw("express/database/sequelize/User.js")?,
        )))
}

fn fastify(database: Database, easy_mongoo: bool) -> Result<Fragment> {
    let (fragment, plugin) = match database {
        Database::MongoDb if easy_mongoo => (
            Fragment::new().dependency("easy-mongoo", "^1.0.0"),
            "easy-mongoo",
        ),
        Database::MongoDb => (
            Fragment::new().dependency("@fastify/mongodb", "^7.0.0"),
            "mongodb",
        ),
        Database::MySql => (Fragment::new().dependency("@fastify/mysql", "^4.0.0"), "mysql"),
        Database::Postgres => (
            Fragment::new()
                .dependency("@fastify/postgres", "^5.0.0")
                .dependency("pg", "^8.0.0"),
            "postgres",
        ),
    };

    Ok(fragment.file(GeneratedFile::text(
        FASTIFY_PLUGIN,
        engine::raw(&format!("fastify/database/{plugin}.js"))?,
    )))
}
