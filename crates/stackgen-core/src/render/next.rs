//! Next.js app router project

use super::react::TAILWIND_DEPENDENCIES;
use crate::config::{FrontendOptions, ProjectName};
use crate::error::Result;
use crate::templates::{engine, GeneratedFile, PackageManifest, TemplateOutput};
use minijinja::context;

const DEPENDENCIES: &[(&str, &str)] = &[
    ("next", "^14.0.0"),
    ("react", "^18.2.0"),
    ("react-dom", "^18.2.0"),
];

const TYPESCRIPT_DEPENDENCIES: &[(&str, &str)] = &[
    ("typescript", "^5.0.0"),
    ("@types/node", "^20.0.0"),
    ("@types/react", "^18.2.0"),
    ("@types/react-dom", "^18.2.0"),
];

pub fn render(name: &ProjectName, opts: &FrontendOptions) -> Result<TemplateOutput> {
    let ext = if opts.typescript { "tsx" } else { "jsx" };
    let ctx = context! {
        name => name.as_str(),
        typescript => opts.typescript,
        tailwind => opts.tailwind,
        ext => ext,
    };

    let mut manifest = PackageManifest::new(name.identifier(), "0.1.0")
        .private()
        .script("dev", "next dev")
        .script("build", "next build")
        .script("start", "next start")
        .script("lint", "next lint")
        .with_dependencies(DEPENDENCIES)
        .with_dev_dependencies(&[("eslint", "^8.45.0"), ("eslint-config-next", "^14.0.0")]);
    if opts.typescript {
        manifest = manifest.with_dev_dependencies(TYPESCRIPT_DEPENDENCIES);
    }
    if opts.tailwind {
        manifest = manifest.with_dev_dependencies(TAILWIND_DEPENDENCIES);
    }

    let mut output = TemplateOutput::new();
    output.push(GeneratedFile::manifest("package.json", manifest))?;
    output.push(GeneratedFile::text(
        "next.config.mjs",
        engine::raw("next/next.config.mjs")?,
    ))?;

    if opts.typescript {
        output.push(GeneratedFile::text(
            "tsconfig.json",
            engine::raw("next/tsconfig.json")?,
        ))?;
        output.push(GeneratedFile::text(
            "next-env.d.ts",
            engine::raw("next/next-env.d.ts")?,
        ))?;
    } else {
        output.push(GeneratedFile::text(
            "jsconfig.json",
            engine::raw("next/jsconfig.json")?,
        ))?;
    }

    output.push(GeneratedFile::text(
        format!("app/layout.{ext}"),
        engine::render("next/app/layout.jsx", &ctx)?,
    ))?;
    output.push(GeneratedFile::text(
        format!("app/page.{ext}"),
        engine::render("next/app/page.jsx", &ctx)?,
    ))?;

    if opts.tailwind {
        output.push(GeneratedFile::text(
            "app/globals.css",
            engine::raw("next/app/globals.tailwind.css")?,
        ))?;
        output.push(GeneratedFile::text(
            "tailwind.config.js",
            engine::raw("next/tailwind.config.js")?,
        ))?;
        output.push(GeneratedFile::text(
            "postcss.config.js",
            engine::raw("next/postcss.config.js")?,
        ))?;
    } else {
        output.push(GeneratedFile::text(
            "app/globals.css",
            engine::raw("next/app/globals.plain.css")?,
        ))?;
    }

    output.push(GeneratedFile::binary(
        "app/favicon.ico",
        engine::raw_bytes("next/app/favicon.ico")?,
    ))?;
    output.push(GeneratedFile::text(
        ".eslintrc.json",
        engine::raw("next/eslintrc.json")?,
    ))?;
    output.push(GeneratedFile::text(
        ".gitignore",
        engine::raw("shared/gitignore")?,
    ))?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrontendFramework;

    fn options(typescript: bool, tailwind: bool) -> FrontendOptions {
        FrontendOptions {
            framework: FrontendFramework::Next,
            typescript,
            tailwind,
            auth_ui: false,
        }
    }

    #[test]
    fn test_typescript_next_project() {
        let name = ProjectName::parse("demo").unwrap();
        let output = render(&name, &options(true, true)).unwrap();

        for path in [
            "next.config.mjs",
            "tsconfig.json",
            "next-env.d.ts",
            "app/layout.tsx",
            "app/page.tsx",
            "app/globals.css",
            "tailwind.config.js",
            "postcss.config.js",
        ] {
            assert!(output.contains(path), "{path} missing");
        }
        assert!(!output.contains("jsconfig.json"));

        let manifest = output.get("package.json").unwrap().contents().unwrap();
        assert!(manifest.contains("\"next\": \"^14.0.0\""));
        assert!(manifest.contains("\"@types/node\""));
        assert!(!manifest.contains("\"type\": \"module\""));

        let layout = output.get("app/layout.tsx").unwrap().contents().unwrap();
        assert!(layout.contains("export const metadata: Metadata = {"));
        assert!(layout.contains("title: 'demo'"));
    }

    #[test]
    fn test_favicon_is_binary_and_copied_verbatim() {
        let name = ProjectName::parse("demo").unwrap();
        let output = render(&name, &options(false, false)).unwrap();

        let favicon = output.get("app/favicon.ico").unwrap();
        assert!(favicon.is_binary());
        assert_eq!(favicon.contents(), None);

        let bytes = favicon.bytes().unwrap();
        assert_eq!(&bytes[..4], &[0, 0, 1, 0]);
        assert_eq!(bytes.as_ref(), engine::raw_bytes("next/app/favicon.ico").unwrap());
    }

    #[test]
    fn test_plain_javascript_next_project() {
        let name = ProjectName::parse("demo").unwrap();
        let output = render(&name, &options(false, false)).unwrap();

        assert!(output.contains("jsconfig.json"));
        assert!(output.contains("app/page.jsx"));
        assert!(!output.contains("tailwind.config.js"));

        let page = output.get("app/page.jsx").unwrap().contents().unwrap();
        assert!(page.contains("className=\"page\""));
        assert!(page.contains("Edit <code>app/page.jsx</code>"));

        let css = output.get("app/globals.css").unwrap().contents().unwrap();
        assert!(!css.contains("@tailwind"));
    }
}
