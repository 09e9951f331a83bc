use std::path::{Path, PathBuf};

use crate::config::{STATIC_DIR, STRUCTURE_FILE, SiteConfig, SiteMode};

use super::assets;
use super::document::{self, RenderedPage, SourceDocument};
use super::highlight::SyntaxHighlighter;
use super::manifest;
use super::markdown::render_markdown;
use super::structure::{self, Structure};
use super::template::{PageTemplate, TemplateError};

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("source error: {0}")]
    Source(#[from] document::DocumentError),

    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    #[error("manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct BuildReport {
    pub output_dir: PathBuf,
    pub pages: usize,
    pub static_files: usize,
}

pub struct Builder {
    config: SiteConfig,
}

impl Builder {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline: wipe and recreate the output directory, copy
    /// static assets, render every source document, then emit the index (and
    /// the manifest in question-bank mode).
    ///
    /// The wipe makes repeated builds idempotent but not atomic; an error
    /// partway through leaves a partially built output directory.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let output_dir = self.config.output.clone();
        assets::prepare_output(&output_dir)?;

        // Static assets are optional; skip silently when absent
        let static_dir = self.config.static_dir();
        let static_files = if static_dir.is_dir() {
            assets::copy_dir_all(&static_dir, &output_dir.join(STATIC_DIR))?
        } else {
            0
        };

        let documents = document::discover(&self.config.root, self.config.excluded_source())?;
        if documents.is_empty() {
            println!(
                "No markdown files found in {}",
                self.config.root.display()
            );
            return Ok(BuildReport {
                output_dir,
                pages: 0,
                static_files,
            });
        }

        let template = PageTemplate::load(&self.config.page_template())?;
        let highlighter = SyntaxHighlighter::default();

        let mut pages = Vec::with_capacity(documents.len());
        for doc in &documents {
            let page = self.render_page(doc, &template, &highlighter, &output_dir)?;
            println!("Wrote {}", page.slug);
            pages.push(page);
        }

        match self.config.mode {
            SiteMode::Notes => self.write_index(&pages, &template, &output_dir)?,
            SiteMode::QuestionBank => self.write_question_bank(&pages, &output_dir)?,
        }

        Ok(BuildReport {
            output_dir,
            pages: pages.len(),
            static_files,
        })
    }

    /// Render one source document through the shared template and write it
    /// as `<stem>.html`.
    fn render_page(
        &self,
        doc: &SourceDocument,
        template: &PageTemplate,
        highlighter: &SyntaxHighlighter,
        output_dir: &Path,
    ) -> Result<RenderedPage, BuildError> {
        let text = std::fs::read_to_string(&doc.path)?;
        let title = document::extract_title(&text, doc.stem());
        let body = render_markdown(&text, highlighter);
        let html = template.render(&title, &body);

        let slug = doc.slug();
        std::fs::write(output_dir.join(&slug), html)?;

        Ok(RenderedPage {
            title,
            slug,
            source: doc.file_name.clone(),
        })
    }

    /// Generate the notes index: a list of links through the shared template.
    fn write_index(
        &self,
        pages: &[RenderedPage],
        template: &PageTemplate,
        output_dir: &Path,
    ) -> Result<(), BuildError> {
        let items: Vec<String> = pages
            .iter()
            .map(|page| {
                format!(
                    "<li><a href=\"{}\">{}</a> <small>({})</small></li>",
                    page.slug, page.title, page.source
                )
            })
            .collect();
        let content = format!("<h2>Notes</h2>\n<ul>{}</ul>\n", items.join("\n"));

        let html = template.render("Notes Index", &content);
        std::fs::write(output_dir.join("index.html"), html)?;
        println!("Wrote index.html");
        Ok(())
    }

    /// Question-bank output: the pre-built index template copied verbatim,
    /// plus the questions.json manifest.
    fn write_question_bank(
        &self,
        pages: &[RenderedPage],
        output_dir: &Path,
    ) -> Result<(), BuildError> {
        std::fs::copy(self.config.index_template(), output_dir.join("index.html"))?;
        println!("Wrote index.html");

        // A missing README is tolerated; the manifest is just empty
        let structure_path = self.config.structure_file();
        let structure = if structure_path.is_file() {
            structure::parse_structure(&std::fs::read_to_string(&structure_path)?)
        } else {
            println!("No {STRUCTURE_FILE} found, emitting an empty manifest");
            Structure::default()
        };

        let entries = manifest::build_manifest(&structure, pages);
        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(output_dir.join("questions.json"), json)?;
        println!("Wrote questions.json ({} entries)", entries.len());

        Ok(())
    }
}
