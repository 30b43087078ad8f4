//! Markup rendering port.

/// Output of rendering a post body once: a table of contents and the html
/// body. Empty input renders to empty fragments, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedBody {
    /// HTML fragment listing document headings, one `<li>` per heading.
    pub toc: String,
    /// Full HTML rendering of the raw body.
    pub body_html: String,
}

/// Turns a post's raw body into derived markup. Called at most once per
/// retrieval request; results are never persisted.
pub trait MarkupRenderer: Send + Sync {
    fn render(&self, body: &str) -> RenderedBody;
}
