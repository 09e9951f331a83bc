//! Build configuration.
//!
//! The site layout is fixed by convention: sources live directly in the
//! root, templates under `templates/`, static assets under `static/`. Only
//! the root, the output directory, and the site mode vary per invocation.

use std::path::PathBuf;

/// Name of the static-assets directory, both in the root and in the output.
pub const STATIC_DIR: &str = "static";

/// Name of the templates directory under the root.
pub const TEMPLATES_DIR: &str = "templates";

/// The shared page template with `{title}` and `{content}` tokens.
pub const PAGE_TEMPLATE: &str = "base.html";

/// The pre-built index page copied verbatim in question-bank mode.
pub const INDEX_TEMPLATE: &str = "index.html";

/// The structure document parsed in question-bank mode. Matched literally,
/// including case, and excluded from page rendering.
pub const STRUCTURE_FILE: &str = "README.MD";

/// How the site is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteMode {
    /// Render every Markdown file and generate a linked index page.
    Notes,
    /// Additionally parse the README structure document and emit a
    /// `questions.json` manifest; the index page is copied from a pre-built
    /// template instead of being generated.
    QuestionBank,
}

/// Configuration for a single build, scoped to one run.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// The directory containing sources, templates, and static assets
    pub root: PathBuf,
    /// The directory the site is written into
    pub output: PathBuf,
    /// Which variant of the site to build
    pub mode: SiteMode,
}

impl SiteConfig {
    /// Create a config, resolving a relative output directory against the root.
    pub fn new(root: PathBuf, output: PathBuf, mode: SiteMode) -> Self {
        let output = if output.is_relative() {
            root.join(output)
        } else {
            output
        };
        Self { root, output, mode }
    }

    pub fn static_dir(&self) -> PathBuf {
        self.root.join(STATIC_DIR)
    }

    pub fn page_template(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR).join(PAGE_TEMPLATE)
    }

    pub fn index_template(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR).join(INDEX_TEMPLATE)
    }

    pub fn structure_file(&self) -> PathBuf {
        self.root.join(STRUCTURE_FILE)
    }

    /// The source file excluded from page rendering, if any.
    pub fn excluded_source(&self) -> Option<&str> {
        match self.mode {
            SiteMode::Notes => None,
            SiteMode::QuestionBank => Some(STRUCTURE_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_output_resolves_against_root() {
        let config = SiteConfig::new("/srv/notes".into(), "site".into(), SiteMode::Notes);
        assert_eq!(config.output, PathBuf::from("/srv/notes/site"));
    }

    #[test]
    fn test_absolute_output_is_kept() {
        let config = SiteConfig::new("/srv/notes".into(), "/tmp/out".into(), SiteMode::Notes);
        assert_eq!(config.output, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_excluded_source_by_mode() {
        let notes = SiteConfig::new(".".into(), "site".into(), SiteMode::Notes);
        assert_eq!(notes.excluded_source(), None);

        let bank = SiteConfig::new(".".into(), "site".into(), SiteMode::QuestionBank);
        assert_eq!(bank.excluded_source(), Some("README.MD"));
    }
}
