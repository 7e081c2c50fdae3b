//! Markdown rendering for assistant replies.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

/// Render a chatbot answer to HTML.
///
/// Raw HTML in the answer is dropped before rendering; the backend is not
/// trusted to emit markup. Links and images whose URL is not relative or
/// `http`/`https`/`mailto` are reduced to their text.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut in_unsafe_link = false;
    let mut in_unsafe_image = false;
    let parser = Parser::new_ext(markdown, options).filter_map(move |event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { ref dest_url, .. }) if !is_safe_url(dest_url) => {
            in_unsafe_link = true;
            None
        }
        Event::End(TagEnd::Link) if in_unsafe_link => {
            in_unsafe_link = false;
            None
        }
        Event::Start(Tag::Image { ref dest_url, .. }) if !is_safe_url(dest_url) => {
            in_unsafe_image = true;
            None
        }
        Event::End(TagEnd::Image) if in_unsafe_image => {
            in_unsafe_image = false;
            None
        }
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Relative URLs and `http`, `https` and `mailto` are allowed.
///
/// Browsers ignore whitespace and control characters inside a scheme, so
/// those are stripped before the scheme is read.
pub(crate) fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();
    match cleaned.find([':', '/', '?', '#']) {
        Some(i) if cleaned[i..].starts_with(':') => matches!(&cleaned[..i], "http" | "https" | "mailto"),
        _ => true,
    }
}
