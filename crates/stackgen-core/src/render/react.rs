//! React single-page app built with Vite

use crate::config::{FrontendOptions, ProjectName};
use crate::error::Result;
use crate::templates::{engine, GeneratedFile, PackageManifest, TemplateOutput};
use minijinja::{context, Value};

const DEPENDENCIES: &[(&str, &str)] = &[
    ("react", "^18.2.0"),
    ("react-dom", "^18.2.0"),
    ("react-router-dom", "^6.14.0"),
];

const DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("vite", "^4.4.0"),
    ("@vitejs/plugin-react", "^4.0.0"),
    ("@types/react", "^18.2.0"),
    ("@types/react-dom", "^18.2.0"),
    ("eslint", "^8.45.0"),
    ("eslint-plugin-react", "^7.32.2"),
    ("eslint-plugin-react-hooks", "^4.6.0"),
    ("eslint-plugin-react-refresh", "^0.4.3"),
];

pub(crate) const TAILWIND_DEPENDENCIES: &[(&str, &str)] = &[
    ("tailwindcss", "^3.3.0"),
    ("autoprefixer", "^10.4.0"),
    ("postcss", "^8.4.0"),
];

/// Components rendered for every React project, without extension
const COMPONENTS: &[&str] = &[
    "src/main",
    "src/App",
    "src/layouts/MainLayout",
    "src/components/Navbar",
    "src/components/Footer",
    "src/pages/Home",
    "src/pages/ZenuxsPage",
];

const AUTH_PAGES: &[&str] = &["Login", "Register", "Dashboard"];

pub fn render(name: &ProjectName, opts: &FrontendOptions) -> Result<TemplateOutput> {
    let (ext, script) = if opts.typescript {
        ("tsx", "ts")
    } else {
        ("jsx", "js")
    };
    let ctx = context! {
        name => name.as_str(),
        typescript => opts.typescript,
        tailwind => opts.tailwind,
        auth_ui => opts.auth_ui,
        ext => ext,
    };

    let mut output = TemplateOutput::new();
    output.push(GeneratedFile::manifest("package.json", manifest(name, opts)))?;
    output.push(GeneratedFile::text(
        "index.html",
        engine::render("react/index.html", &ctx)?,
    ))?;
    output.push(GeneratedFile::text(
        format!("vite.config.{script}"),
        engine::raw("react/vite.config.js")?,
    ))?;

    if opts.typescript {
        for (path, template) in [
            ("tsconfig.json", "react/tsconfig.json"),
            ("tsconfig.node.json", "react/tsconfig.node.json"),
            ("src/vite-env.d.ts", "react/vite-env.d.ts"),
        ] {
            output.push(GeneratedFile::text(path, engine::raw(template)?))?;
        }
    } else {
        output.push(GeneratedFile::text(
            ".eslintrc.cjs",
            engine::raw("react/eslintrc.cjs")?,
        ))?;
    }

    for component in COMPONENTS {
        output.push(render_component(component, ext, &ctx)?)?;
    }

    let styles = if opts.tailwind {
        "react/src/styles/globals.tailwind.css"
    } else {
        "react/src/styles/globals.plain.css"
    };
    output.push(GeneratedFile::text(
        "src/styles/globals.css",
        engine::raw(styles)?,
    ))?;

    if opts.tailwind {
        output.push(GeneratedFile::text(
            "tailwind.config.js",
            engine::raw("react/tailwind.config.js")?,
        ))?;
        output.push(GeneratedFile::text(
            "postcss.config.js",
            engine::raw("react/postcss.config.js")?,
        ))?;
    }

    if opts.auth_ui {
        let flavor = if opts.tailwind { "tailwind" } else { "plain" };
        for page in AUTH_PAGES {
            output.push(GeneratedFile::text(
                format!("src/pages/auth/{page}.{ext}"),
                engine::render(&format!("react/auth/{flavor}/{page}.jsx"), &ctx)?,
            ))?;
        }
        if !opts.tailwind {
            output.push(GeneratedFile::text(
                "src/styles/Auth.css",
                engine::raw("react/auth/plain/Auth.css")?,
            ))?;
        }
    }

    output.push(GeneratedFile::text(
        "public/vite.svg",
        engine::raw("react/public/vite.svg")?,
    ))?;
    output.push(GeneratedFile::text(
        ".gitignore",
        engine::raw("shared/gitignore")?,
    ))?;

    Ok(output)
}

fn manifest(name: &ProjectName, opts: &FrontendOptions) -> PackageManifest {
    let lint = if opts.typescript {
        "tsc --noEmit"
    } else {
        "eslint src --ext js,jsx --report-unused-disable-directives --max-warnings 0"
    };

    let mut manifest = PackageManifest::new(name.identifier(), "0.1.0")
        .private()
        .es_module()
        .script("dev", "vite")
        .script("build", "vite build")
        .script("preview", "vite preview")
        .script("lint", lint)
        .with_dependencies(DEPENDENCIES)
        .with_dev_dependencies(DEV_DEPENDENCIES);

    if opts.typescript {
        manifest.dev_dependency("typescript", "^5.0.0");
    }
    if opts.tailwind {
        manifest = manifest.with_dev_dependencies(TAILWIND_DEPENDENCIES);
    }
    manifest
}

fn render_component(stem: &str, ext: &str, ctx: &Value) -> Result<GeneratedFile> {
    Ok(GeneratedFile::text(
        format!("{stem}.{ext}"),
        engine::render(&format!("react/{stem}.jsx"), ctx)?,
    ))
}
