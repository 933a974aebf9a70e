use crate::error::RenderError;

/// Boundary to an external markup-rendering service.
///
/// `format` is a short tag such as `"markdown"`, `"rdoc"`, or `"raw"` that
/// the service uses to pick a rendering engine; how it interprets the tag is
/// opaque to this crate. Implementations are expected to be pure and
/// synchronous.
pub trait MarkupRenderer {
    /// Renders `content` according to `format`.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when the external engine fails; the
    /// segmenter passes it through untouched.
    fn render(&self, format: &str, content: &str) -> Result<String, RenderError>;
}

/// Pass-through renderer that returns content verbatim for any format tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawRenderer;

impl MarkupRenderer for RawRenderer {
    fn render(&self, _format: &str, content: &str) -> Result<String, RenderError> {
        Ok(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_renderer_is_a_pass_through() {
        let rendered = RawRenderer.render("markdown", "* item").unwrap();
        assert_eq!(rendered, "* item");
    }
}
