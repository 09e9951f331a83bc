//! Markdown rendering with syntax highlighting and heading anchors.

use std::collections::HashSet;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

use super::highlight::SyntaxHighlighter;

/// Render markdown to HTML using pulldown-cmark.
///
/// Fenced code blocks are routed through the syntax highlighter, and every
/// heading gets a slugified `id` attribute so pages can be deep-linked.
pub fn render_markdown(markdown: &str, highlighter: &SyntaxHighlighter) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());

    // Process events, intercepting code blocks for syntax highlighting
    let mut in_code_block = false;
    let mut code_language = String::new();
    let mut code_content = String::new();

    // Intercept headings to add id attributes for anchor links
    let mut in_heading: Option<HeadingLevel> = None;
    let mut heading_text = String::new();
    let mut used_heading_ids: HashSet<String> = HashSet::new();

    let events: Vec<Event> = parser
        .flat_map(|event| match event {
            Event::Start(Tag::Heading { level, .. }) => {
                in_heading = Some(level);
                heading_text.clear();
                vec![]
            }
            Event::End(TagEnd::Heading(_)) if in_heading.is_some() => {
                let level = in_heading.take().unwrap() as usize;

                // Generate a unique id from the heading text
                let base_id = slugify(&heading_text);
                let mut id = base_id.clone();
                let mut suffix = 1;
                while used_heading_ids.contains(&id) {
                    id = format!("{base_id}-{suffix}");
                    suffix += 1;
                }
                used_heading_ids.insert(id.clone());

                vec![Event::Html(
                    format!("<h{level} id=\"{id}\">{heading_text}</h{level}>").into(),
                )]
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                in_code_block = true;
                code_language = match kind {
                    CodeBlockKind::Fenced(lang) => lang.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                code_content.clear();
                vec![] // Don't emit the start tag yet
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                // Apply syntax highlighting and emit as raw HTML
                let highlighted = highlighter.highlight(&code_content, &code_language);
                vec![Event::Html(highlighted.into())]
            }
            Event::Text(text) if in_code_block => {
                code_content.push_str(&text);
                vec![]
            }
            Event::Text(text) if in_heading.is_some() => {
                heading_text.push_str(&text);
                vec![]
            }
            Event::Code(text) if in_heading.is_some() => {
                heading_text.push_str(&text);
                vec![]
            }
            _ => vec![event],
        })
        .collect();

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());
    html_output
}

/// Convert a string to a slug suitable for use as an HTML id.
fn slugify(s: &str) -> String {
    s.to_lowercase()
        .replace(' ', "-")
        .replace(|c: char| !c.is_alphanumeric() && c != '-', "")
}
