//! `package.json` manifest model

use serde::ser::Serializer;
use serde::Serialize;
use std::collections::BTreeMap;

/// Structured `package.json`.
///
/// Kept structured until it is written so that later passes (feature
/// fragments, full-stack wiring) can add dependencies without parsing JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: &'static str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub private: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub module_type: Option<&'static str>,
    #[serde(serialize_with = "ordered_map")]
    pub scripts: Vec<(&'static str, String)>,
    pub dependencies: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub dev_dependencies: BTreeMap<String, String>,
}

fn ordered_map<S: Serializer>(
    entries: &[(&'static str, String)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|(k, v)| (k, v)))
}

impl PackageManifest {
    pub fn new(name: impl Into<String>, version: &'static str) -> Self {
        Self {
            name: name.into(),
            version,
            private: false,
            module_type: None,
            scripts: Vec::new(),
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
        }
    }

    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    /// Mark the package as an ES module (`"type": "module"`)
    pub fn es_module(mut self) -> Self {
        self.module_type = Some("module");
        self
    }

    pub fn script(mut self, name: &'static str, command: impl Into<String>) -> Self {
        self.scripts.push((name, command.into()));
        self
    }

    pub fn dependency(&mut self, name: &str, version: &str) {
        self.dependencies
            .insert(name.to_string(), version.to_string());
    }

    pub fn dev_dependency(&mut self, name: &str, version: &str) {
        self.dev_dependencies
            .insert(name.to_string(), version.to_string());
    }

    pub fn with_dependencies(mut self, deps: &[(&str, &str)]) -> Self {
        for (name, version) in deps {
            self.dependency(name, version);
        }
        self
    }

    pub fn with_dev_dependencies(mut self, deps: &[(&str, &str)]) -> Self {
        for (name, version) in deps {
            self.dev_dependency(name, version);
        }
        self
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }

    /// Two-space indented JSON with a trailing newline
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_in_npm_field_order() {
        let manifest = PackageManifest::new("demo", "1.0.0")
            .es_module()
            .script("start", "node server.js")
            .script("dev", "nodemon server.js")
            .with_dependencies(&[("express", "^4.18.0"), ("cors", "^2.8.5")]);

        let json = manifest.to_pretty_json().unwrap();
        assert_eq!(
            json,
            r#"{
  "name": "demo",
  "version": "1.0.0",
  "type": "module",
  "scripts": {
    "start": "node server.js",
    "dev": "nodemon server.js"
  },
  "dependencies": {
    "cors": "^2.8.5",
    "express": "^4.18.0"
  }
}
"#
        );
    }

    #[test]
    fn test_private_and_dev_dependencies() {
        let manifest = PackageManifest::new("web", "0.1.0")
            .private()
            .with_dev_dependencies(&[("vite", "^4.4.0")]);

        let value: serde_json::Value =
            serde_json::from_str(&manifest.to_pretty_json().unwrap()).unwrap();
        assert_eq!(value["private"], true);
        assert_eq!(value["devDependencies"]["vite"], "^4.4.0");
        assert!(manifest.has_dependency("vite"));
        assert!(!manifest.has_dependency("react"));
    }
}
