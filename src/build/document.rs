//! Source-document discovery and page metadata.

use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum DocumentError {
    #[error("source root does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read directory entry in {path}: {source}")]
    ReadEntry {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A Markdown file discovered in the source root.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Full path to the file on disk
    pub path: PathBuf,
    /// The file name, e.g. "notes.md"
    pub file_name: String,
}

impl SourceDocument {
    /// The file name without its extension.
    pub fn stem(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.file_name)
    }

    /// The output file name, e.g. "notes.html" for "notes.md".
    pub fn slug(&self) -> String {
        format!("{}.html", self.stem())
    }
}

/// Metadata for a page that has been rendered and written to the output
/// directory. Retained only long enough to build the index or manifest.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub title: String,
    pub slug: String,
    /// The source file name the page was rendered from
    pub source: String,
}

/// Derive an output file name from an arbitrary source file name.
/// "Q1.md" -> "Q1.html", "Q1" -> "Q1.html".
pub fn slug_for(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);
    format!("{stem}.html")
}

/// Discover all Markdown files directly in the root, sorted by file name.
///
/// Only files with a lowercase `.md` extension count. A file named exactly
/// `exclude` is skipped (the structure document in question-bank mode).
/// Subdirectories are not descended into.
pub fn discover(root: &Path, exclude: Option<&str>) -> Result<Vec<SourceDocument>, DocumentError> {
    if !root.is_dir() {
        return Err(DocumentError::RootNotFound(root.to_path_buf()));
    }

    let entries = std::fs::read_dir(root).map_err(|source| DocumentError::ReadDir {
        path: root.to_path_buf(),
        source,
    })?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DocumentError::ReadEntry {
            path: root.to_path_buf(),
            source,
        })?;

        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("md") {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if exclude == Some(file_name.as_str()) {
            continue;
        }

        documents.push(SourceDocument { path, file_name });
    }

    documents.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(documents)
}

/// Extract a page title from document text.
///
/// Returns the trimmed text of the first level-1 heading (a line starting
/// with a single `#` followed by whitespace), or the default if no such line
/// exists. Later level-1 headings are ignored.
pub fn extract_title(text: &str, default: &str) -> String {
    for line in text.lines() {
        let Some(rest) = line.strip_prefix('#') else {
            continue;
        };
        if rest.starts_with('#') {
            continue;
        }
        let title = rest.trim_start();
        if title.len() == rest.len() || title.is_empty() {
            // No whitespace after the marker, or nothing but whitespace
            continue;
        }
        return title.trim_end().to_string();
    }
    default.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title_first_heading() {
        let text = "intro\n# Hello World\n\n# Second\n";
        assert_eq!(extract_title(text, "fallback"), "Hello World");
    }

    #[test]
    fn test_extract_title_trims_whitespace() {
        assert_eq!(extract_title("#   Padded Title   ", "x"), "Padded Title");
    }

    #[test]
    fn test_extract_title_ignores_deeper_headings() {
        let text = "## Subsection\n### Deeper\n";
        assert_eq!(extract_title(text, "notes"), "notes");
    }

    #[test]
    fn test_extract_title_requires_space_after_marker() {
        assert_eq!(extract_title("#NoSpace", "fallback"), "fallback");
    }

    #[test]
    fn test_extract_title_default_when_missing() {
        assert_eq!(extract_title("plain text only", "notes"), "notes");
    }

    #[test]
    fn test_slug_from_document() {
        let doc = SourceDocument {
            path: PathBuf::from("/root/notes.md"),
            file_name: "notes.md".to_string(),
        };
        assert_eq!(doc.stem(), "notes");
        assert_eq!(doc.slug(), "notes.html");
    }

    #[test]
    fn test_slug_for_names() {
        assert_eq!(slug_for("Q1.md"), "Q1.html");
        assert_eq!(slug_for("Q1"), "Q1.html");
        assert_eq!(slug_for("a.b.md"), "a.b.html");
    }

    #[test]
    fn test_discover_sorts_and_excludes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.md"), "b").unwrap();
        std::fs::write(dir.path().join("a.md"), "a").unwrap();
        std::fs::write(dir.path().join("README.MD"), "structure").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not markdown").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/c.md"), "nested").unwrap();

        let docs = discover(dir.path(), Some("README.MD")).unwrap();
        let names: Vec<&str> = docs.iter().map(|d| d.file_name.as_str()).collect();
        assert_eq!(names, ["a.md", "b.md"]);
    }

    #[test]
    fn test_discover_missing_root() {
        let result = discover(Path::new("/nonexistent/notes"), None);
        assert!(matches!(result, Err(DocumentError::RootNotFound(_))));
    }
}
