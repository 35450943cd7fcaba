//! Markdown rendering for entry descriptions.

use pulldown_cmark::{Options, Parser, html};

/// Renders a Markdown description to an HTML fragment.
#[must_use]
pub fn render_description(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_description_emphasis() {
        let html = render_description("The first **general-purpose** computer.");

        assert_eq!(
            html,
            "<p>The first <strong>general-purpose</strong> computer.</p>\n"
        );
    }

    #[test]
    fn test_render_description_empty() {
        assert_eq!(render_description(""), "");
    }

    #[test]
    fn test_render_description_escapes_inline_text() {
        let html = render_description("1 < 2 & 3");

        assert_eq!(html, "<p>1 &lt; 2 &amp; 3</p>\n");
    }
}
