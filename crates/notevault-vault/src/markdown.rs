//! Markdown to HTML rendering for previews.

use pulldown_cmark::{Options, Parser, html};

/// Render Markdown into a bare HTML fragment with the extended syntax the
/// editor produces (tables, strikethrough, task lists, footnotes).
pub fn render(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Render Markdown wrapped in the `markdown-body` container the web
/// client styles.
pub fn render_page(markdown: &str) -> String {
    format!("<div class=\"markdown-body\">{}</div>", render(markdown))
}
