use autumnus::{HtmlLinkedBuilder, formatter::Formatter, languages::Language};

/// A syntax highlighter for fenced code blocks, backed by autumnus.
///
/// Unknown languages and formatter failures fall back to an escaped plain
/// `<pre><code>` block rather than erroring.
#[derive(Default)]
pub struct SyntaxHighlighter;

impl SyntaxHighlighter {
    /// Highlight code and return HTML with CSS classes.
    pub fn highlight(&self, code: &str, language: &str) -> String {
        let lang = Language::guess(language, code);

        // Language::guess falls back to PlainText for anything it doesn't
        // recognize; treat that as "no highlighting" unless plain text was
        // actually asked for.
        if matches!(lang, Language::PlainText)
            && !language.is_empty()
            && language != "plaintext"
            && language != "text"
        {
            return plain_code_block(code, language);
        }

        let Ok(formatter) = HtmlLinkedBuilder::new().source(code).lang(lang).build() else {
            return plain_code_block(code, language);
        };

        let mut output: Vec<u8> = Vec::new();
        if formatter.format(&mut output).is_err() {
            return plain_code_block(code, language);
        }
        String::from_utf8(output).unwrap_or_else(|_| plain_code_block(code, language))
    }
}

/// A plain code block with no highlighting markup.
fn plain_code_block(code: &str, language: &str) -> String {
    let escaped = html_escape(code);
    if language.is_empty() {
        format!("<pre><code>{escaped}</code></pre>")
    } else {
        format!("<pre><code class=\"language-{language}\">{escaped}</code></pre>")
    }
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
