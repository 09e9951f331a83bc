//! The shared page template.
//!
//! Deliberately not a template engine: rendering is a global substring
//! replace of two fixed placeholder tokens, nothing more.

use std::path::{Path, PathBuf};

/// The recognized placeholder tokens.
const TITLE_TOKEN: &str = "{title}";
const CONTENT_TOKEN: &str = "{content}";

#[derive(thiserror::Error, Debug)]
pub enum TemplateError {
    #[error("failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A page template with literal `{title}` and `{content}` tokens.
pub struct PageTemplate {
    text: String,
}

impl PageTemplate {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    /// Load a template from disk. A missing template is a hard error.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let text = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(text))
    }

    /// Substitute the title and content into the template.
    ///
    /// Every occurrence of each token is replaced. The replacement is not
    /// recursive, so tokens appearing in the substituted values are left
    /// untouched.
    pub fn render(&self, title: &str, content: &str) -> String {
        self.text
            .replace(TITLE_TOKEN, title)
            .replace(CONTENT_TOKEN, content)
    }
}
