//! Markdown rendering via pulldown-cmark.
//!
//! Implements the `MarkupRenderer` port: one pass over the event stream
//! collects headings for the table of contents and assigns each an anchor
//! id, then the same events are rendered to html so toc links resolve.

use std::collections::HashMap;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};

use quill_core::ports::{MarkupRenderer, RenderedBody};

/// CommonMark renderer with tables, strikethrough and footnotes enabled.
pub struct CmarkRenderer {
    options: Options,
}

impl CmarkRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_FOOTNOTES);
        Self { options }
    }
}

impl Default for CmarkRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupRenderer for CmarkRenderer {
    fn render(&self, body: &str) -> RenderedBody {
        if body.trim().is_empty() {
            return RenderedBody::default();
        }

        let mut events: Vec<Event> = Parser::new_ext(body, self.options).collect();
        let mut toc = String::new();
        let mut used_slugs: HashMap<String, usize> = HashMap::new();

        let mut i = 0;
        while i < events.len() {
            let explicit_id = match &events[i] {
                Event::Start(Tag::Heading { id, .. }) => Some(id.as_ref().map(|s| s.to_string())),
                _ => None,
            };
            let Some(explicit_id) = explicit_id else {
                i += 1;
                continue;
            };

            // Collect the heading's visible text up to its end tag.
            let mut text = String::new();
            let mut end = i + 1;
            while end < events.len() {
                match &events[end] {
                    Event::End(TagEnd::Heading(_)) => break,
                    Event::Text(t) | Event::Code(t) => text.push_str(t),
                    _ => {}
                }
                end += 1;
            }

            let anchor = explicit_id.unwrap_or_else(|| unique_slug(&text, &mut used_slugs));
            if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
                *id = Some(CowStr::Boxed(anchor.clone().into_boxed_str()));
            }

            toc.push_str("<li><a href=\"#");
            toc.push_str(&anchor);
            toc.push_str("\">");
            toc.push_str(&escape_text(&text));
            toc.push_str("</a></li>");

            i = end + 1;
        }

        let mut body_html = String::new();
        html::push_html(&mut body_html, events.into_iter());

        RenderedBody { toc, body_html }
    }
}

/// Anchor slug from heading text, disambiguated against earlier headings.
fn unique_slug(text: &str, used: &mut HashMap<String, usize>) -> String {
    let mut slug = String::new();
    let mut last_dash = true;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    let slug = slug.trim_end_matches('-').to_string();
    let slug = if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    };

    let seen = used.entry(slug.clone()).or_insert(0);
    *seen += 1;
    if *seen == 1 {
        slug
    } else {
        format!("{}-{}", slug, *seen - 1)
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_renders_to_empty_fragments() {
        let rendered = CmarkRenderer::new().render("");
        assert_eq!(rendered, RenderedBody::default());

        let rendered = CmarkRenderer::new().render("   \n  ");
        assert_eq!(rendered, RenderedBody::default());
    }

    #[test]
    fn body_without_headings_has_empty_toc() {
        let rendered = CmarkRenderer::new().render("just a paragraph");
        assert!(rendered.toc.is_empty());
        assert_eq!(rendered.body_html.trim(), "<p>just a paragraph</p>");
    }

    #[test]
    fn headings_land_in_toc_with_matching_anchors() {
        let rendered = CmarkRenderer::new().render("# Getting Started\n\ntext\n\n## Deep Dive\n");
        assert_eq!(
            rendered.toc,
            "<li><a href=\"#getting-started\">Getting Started</a></li>\
             <li><a href=\"#deep-dive\">Deep Dive</a></li>"
        );
        assert!(rendered.body_html.contains("id=\"getting-started\""));
        assert!(rendered.body_html.contains("id=\"deep-dive\""));
    }

    #[test]
    fn duplicate_headings_get_distinct_anchors() {
        let rendered = CmarkRenderer::new().render("# Notes\n\n# Notes\n");
        assert!(rendered.toc.contains("#notes"));
        assert!(rendered.toc.contains("#notes-1"));
    }

    #[test]
    fn heading_text_is_escaped_in_toc() {
        let rendered = CmarkRenderer::new().render("# a < b & c\n");
        assert!(rendered.toc.contains("a &lt; b &amp; c"));
    }
}
