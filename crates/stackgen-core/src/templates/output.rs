//! In-memory description of a generated file tree

use crate::error::{Result, ScaffoldError};
use crate::templates::manifest::PackageManifest;
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A piece of a text document. Named blocks can be located and replaced
/// after rendering without searching the serialized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    Text(String),
    Block { name: &'static str, body: String },
}

/// Text file content assembled from chunks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    chunks: Vec<Chunk>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.chunks.push(Chunk::Text(text.into()));
        self
    }

    pub fn block(mut self, name: &'static str, body: impl Into<String>) -> Self {
        self.chunks.push(Chunk::Block {
            name,
            body: body.into(),
        });
        self
    }

    pub fn block_body(&self, name: &str) -> Option<&str> {
        self.chunks.iter().find_map(|chunk| match chunk {
            Chunk::Block { name: n, body } if *n == name => Some(body.as_str()),
            _ => None,
        })
    }

    /// Replace the body of every block called `name`; returns false if there is none
    pub fn replace_block(&mut self, name: &str, new_body: &str) -> bool {
        let mut found = false;
        for chunk in &mut self.chunks {
            if let Chunk::Block { name: n, body } = chunk {
                if *n == name {
                    *body = new_body.to_string();
                    found = true;
                }
            }
        }
        found
    }

    pub fn render(&self) -> String {
        self.chunks
            .iter()
            .map(|chunk| match chunk {
                Chunk::Text(text) => text.as_str(),
                Chunk::Block { body, .. } => body.as_str(),
            })
            .collect()
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Document::new().text(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(Document),
    Manifest(PackageManifest),
    Binary(Cow<'static, [u8]>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the package (or project) root
    pub path: PathBuf,
    pub content: FileContent,
}

impl GeneratedFile {
    pub fn text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self::document(path, Document::from(text.into()))
    }

    pub fn document(path: impl Into<PathBuf>, document: Document) -> Self {
        Self {
            path: path.into(),
            content: FileContent::Text(document),
        }
    }

    pub fn manifest(path: impl Into<PathBuf>, manifest: PackageManifest) -> Self {
        Self {
            path: path.into(),
            content: FileContent::Manifest(manifest),
        }
    }

    pub fn binary(path: impl Into<PathBuf>, bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        Self {
            path: path.into(),
            content: FileContent::Binary(bytes.into()),
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self.content, FileContent::Binary(_))
    }

    /// Serialized file content as written to disk
    pub fn bytes(&self) -> Result<Cow<'_, [u8]>> {
        match &self.content {
            FileContent::Text(document) => Ok(Cow::Owned(document.render().into_bytes())),
            FileContent::Manifest(manifest) => manifest
                .to_pretty_json()
                .map(|json| Cow::Owned(json.into_bytes()))
                .map_err(|source| ScaffoldError::Serialize {
                    path: self.path.clone(),
                    source,
                }),
            FileContent::Binary(bytes) => Ok(Cow::Borrowed(bytes.as_ref())),
        }
    }

    /// Text content, or `None` for binary files
    pub fn contents(&self) -> Option<String> {
        match &self.content {
            FileContent::Binary(_) => None,
            _ => self
                .bytes()
                .ok()
                .and_then(|bytes| String::from_utf8(bytes.into_owned()).ok()),
        }
    }
}

/// Ordered list of generated files with unique paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateOutput {
    files: Vec<GeneratedFile>,
}

impl TemplateOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_files(files: impl IntoIterator<Item = GeneratedFile>) -> Result<Self> {
        let mut output = Self::new();
        for file in files {
            output.push(file)?;
        }
        Ok(output)
    }

    pub fn push(&mut self, file: GeneratedFile) -> Result<()> {
        if self.get(&file.path).is_some() {
            return Err(ScaffoldError::DuplicatePath(file.path));
        }
        self.files.push(file);
        Ok(())
    }

    pub fn extend(&mut self, other: TemplateOutput) -> Result<()> {
        let existing: HashSet<PathBuf> = self.files.iter().map(|f| f.path.clone()).collect();
        if let Some(dup) = other.files.iter().find(|f| existing.contains(&f.path)) {
            return Err(ScaffoldError::DuplicatePath(dup.path.clone()));
        }
        self.files.extend(other.files);
        Ok(())
    }

    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|f| f.path.as_path())
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.get(path).is_some()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&GeneratedFile> {
        let path = path.as_ref();
        self.files.iter().find(|f| f.path == path)
    }

    pub fn get_mut(&mut self, path: impl AsRef<Path>) -> Option<&mut GeneratedFile> {
        let path = path.as_ref();
        self.files.iter_mut().find(|f| f.path == path)
    }

    /// Move every file under `prefix`
    pub fn nest(self, prefix: impl AsRef<Path>) -> Self {
        let prefix = prefix.as_ref();
        Self {
            files: self
                .files
                .into_iter()
                .map(|file| GeneratedFile {
                    path: prefix.join(&file.path),
                    content: file.content,
                })
                .collect(),
        }
    }

    /// Files under `prefix`, with the prefix stripped
    pub fn subtree(&self, prefix: impl AsRef<Path>) -> Self {
        let prefix = prefix.as_ref();
        Self {
            files: self
                .files
                .iter()
                .filter_map(|file| {
                    file.path.strip_prefix(prefix).ok().map(|rest| GeneratedFile {
                        path: rest.to_path_buf(),
                        content: file.content.clone(),
                    })
                })
                .collect(),
        }
    }

    /// Replace a named block inside a text file
    pub fn replace_block(
        &mut self,
        path: impl AsRef<Path>,
        block: &'static str,
        body: &str,
    ) -> Result<()> {
        let path = path.as_ref();
        let missing = || ScaffoldError::WiringTargetMissing {
            path: path.to_path_buf(),
            block,
        };

        if let Some(FileContent::Text(document)) = self.get_mut(path).map(|f| &mut f.content) {
            if document.replace_block(block, body) {
                return Ok(());
            }
        }
        Err(missing())
    }

    pub fn manifest_mut(&mut self, path: impl AsRef<Path>) -> Result<&mut PackageManifest> {
        let path = path.as_ref();
        match self.get_mut(path).map(|f| &mut f.content) {
            Some(FileContent::Manifest(manifest)) => Ok(manifest),
            _ => Err(ScaffoldError::WiringTargetMissing {
                path: path.to_path_buf(),
                block: "dependencies",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> Document {
        Document::new()
            .text("const app = express()\n")
            .block("cors", "app.use(cors())\n")
            .text("app.listen(5000)\n")
    }

    #[test]
    fn test_document_renders_chunks_in_order() {
        assert_eq!(
            server().render(),
            "const app = express()\napp.use(cors())\napp.listen(5000)\n"
        );
        assert_eq!(server().block_body("cors"), Some("app.use(cors())\n"));
        assert_eq!(server().block_body("missing"), None);
    }

    #[test]
    fn test_replace_block_in_output() {
        let mut output =
            TemplateOutput::from_files([GeneratedFile::document("server.js", server())]).unwrap();

        output
            .replace_block("server.js", "cors", "app.use(cors({ origin: 'x' }))\n")
            .unwrap();

        let text = output.get("server.js").unwrap().contents().unwrap();
        assert!(text.contains("origin: 'x'"));
        assert!(!text.contains("app.use(cors())"));
    }

    #[test]
    fn test_replace_missing_block_fails_loudly() {
        let mut output =
            TemplateOutput::from_files([GeneratedFile::text("server.js", "plain")]).unwrap();

        let err = output.replace_block("server.js", "cors", "x").unwrap_err();
        assert!(matches!(err, ScaffoldError::WiringTargetMissing { block: "cors", .. }));

        let err = output.replace_block("other.js", "cors", "x").unwrap_err();
        assert!(matches!(err, ScaffoldError::WiringTargetMissing { .. }));
    }

    #[test]
    fn test_duplicate_paths_rejected() {
        let err = TemplateOutput::from_files([
            GeneratedFile::text("a.txt", "1"),
            GeneratedFile::text("a.txt", "2"),
        ])
        .unwrap_err();
        assert!(matches!(err, ScaffoldError::DuplicatePath(_)));
    }

    #[test]
    fn test_nest_and_subtree() {
        let output = TemplateOutput::from_files([
            GeneratedFile::text("package.json", "{}"),
            GeneratedFile::text("src/index.js", ""),
        ])
        .unwrap();

        let nested = output.clone().nest("frontend");
        assert!(nested.contains("frontend/src/index.js"));
        assert!(!nested.contains("src/index.js"));
        assert_eq!(nested.subtree("frontend"), output);
        assert!(nested.subtree("backend").is_empty());
    }

    #[test]
    fn test_binary_content_is_verbatim() {
        let file = GeneratedFile::binary("icon.ico", vec![0u8, 159, 146, 150]);
        assert!(file.is_binary());
        assert_eq!(file.bytes().unwrap().as_ref(), &[0u8, 159, 146, 150]);
        assert!(file.contents().is_none());
    }
}
