use regex::{Captures, Regex};

use once_cell::sync::OnceCell;

use crate::error::SegmentError;
use crate::patterns::DEFAULT_HEADER_PATTERN;
use crate::render::MarkupRenderer;
use crate::types::{Result, SectionMap};

/// Caller-supplied logic that takes full control of how a header match and
/// its delimited content are written into the section map.
///
/// The strategy may write zero, one, or multiple entries per header, and may
/// store content in any shape (`V`) rather than plain text. It is the
/// alternative to the default one-key-per-header behavior and is mutually
/// exclusive with [`SegmenterBuilder::match_group`].
pub trait PopulateSections<V> {
    fn populate(&self, sections: &mut SectionMap<V>, header: &Captures<'_>, content: &str);
}

impl<V, F> PopulateSections<V> for F
where
    F: Fn(&mut SectionMap<V>, &Captures<'_>, &str),
{
    fn populate(&self, sections: &mut SectionMap<V>, header: &Captures<'_>, content: &str) {
        self(sections, header, content);
    }
}

/// How extracted sections are written into the result map.
enum Population<V> {
    /// Key each section by a captured group of its header match.
    Keyed {
        group: usize,
        into_value: fn(String) -> V,
    },
    /// Delegate all writes to a caller-supplied strategy.
    Custom(Box<dyn PopulateSections<V>>),
}

/// Builder for [`Segmenter`], mirroring the original options hash.
///
/// `document` is required; everything else has a default. Supplying both
/// `match_group` and `population_strategy` is a configuration error.
pub struct SegmenterBuilder<V = String> {
    document: Option<String>,
    header_pattern: Option<Regex>,
    match_group: Option<usize>,
    format: String,
    strategy: Option<Box<dyn PopulateSections<V>>>,
    into_value: Option<fn(String) -> V>,
}

impl SegmenterBuilder<String> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            document: None,
            header_pattern: None,
            match_group: None,
            format: "raw".to_string(),
            strategy: None,
            into_value: Some(std::convert::identity),
        }
    }
}

impl Default for SegmenterBuilder<String> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SegmenterBuilder<V> {
    /// Sets the changelog text to segment.
    #[must_use]
    pub fn document(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }

    /// Sets a compiled header pattern, replacing the built-in convention
    /// pattern.
    #[must_use]
    pub fn header_pattern(mut self, pattern: Regex) -> Self {
        self.header_pattern = Some(pattern);
        self
    }

    /// Compiles `pattern` and sets it as the header pattern.
    ///
    /// # Errors
    ///
    /// Returns `SegmentError::Pattern` if the pattern does not compile.
    pub fn header_pattern_str(mut self, pattern: &str) -> Result<Self> {
        self.header_pattern = Some(Regex::new(pattern)?);
        Ok(self)
    }

    /// Selects which captured sub-group of a header match becomes the section
    /// key. Group `0` is the pattern's first capture group; with the default
    /// pattern that is the version token.
    #[must_use]
    pub fn match_group(mut self, group: usize) -> Self {
        self.match_group = Some(group);
        self
    }

    /// Sets the format tag handed to the markup renderer, e.g. `"markdown"`
    /// or `"rdoc"`. Defaults to `"raw"`.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Replaces the default key-per-header behavior with a custom population
    /// strategy. The strategy decides the section map's value type `W`.
    #[must_use]
    pub fn population_strategy<W, S>(self, strategy: S) -> SegmenterBuilder<W>
    where
        S: PopulateSections<W> + 'static,
    {
        SegmenterBuilder {
            document: self.document,
            header_pattern: self.header_pattern,
            match_group: self.match_group,
            format: self.format,
            strategy: Some(Box::new(strategy)),
            into_value: None,
        }
    }

    /// Builds the segmenter.
    ///
    /// # Errors
    ///
    /// Returns `SegmentError::Configuration` if `document` was not supplied,
    /// or if both `match_group` and `population_strategy` were.
    pub fn build(self) -> Result<Segmenter<V>> {
        if self.match_group.is_some() && self.strategy.is_some() {
            return Err(SegmentError::Configuration(
                "`match_group` and `population_strategy` are mutually exclusive".to_string(),
            ));
        }

        let document = self.document.ok_or_else(|| {
            SegmentError::Configuration("`document` is required".to_string())
        })?;

        let population = match self.strategy {
            Some(strategy) => Population::Custom(strategy),
            None => {
                let into_value = self.into_value.ok_or_else(|| {
                    SegmentError::Configuration(
                        "no population strategy for custom-valued sections".to_string(),
                    )
                })?;
                Population::Keyed {
                    group: self.match_group.unwrap_or(0),
                    into_value,
                }
            }
        };

        Ok(Segmenter {
            document,
            header_pattern: self
                .header_pattern
                .unwrap_or_else(|| DEFAULT_HEADER_PATTERN.clone()),
            population,
            format: self.format,
            sections: OnceCell::new(),
        })
    }
}

/// Splits a changelog document into per-version sections.
///
/// A header pattern is applied across the document; each match opens a
/// section whose content runs up to the next match (or end of document),
/// with boundary newlines stripped. Results are keyed by a captured group of
/// the header match, or written by a custom [`PopulateSections`] strategy.
pub struct Segmenter<V = String> {
    document: String,
    header_pattern: Regex,
    population: Population<V>,
    format: String,
    sections: OnceCell<SectionMap<V>>,
}

impl Segmenter<String> {
    /// Creates a segmenter over `document` with all defaults: the built-in
    /// convention header pattern, version-token keys, and `"raw"` format.
    #[must_use]
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            header_pattern: DEFAULT_HEADER_PATTERN.clone(),
            population: Population::Keyed {
                group: 0,
                into_value: std::convert::identity,
            },
            format: "raw".to_string(),
            sections: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn builder() -> SegmenterBuilder<String> {
        SegmenterBuilder::new()
    }
}

impl<V> Segmenter<V> {
    /// Segments the document into per-version sections.
    ///
    /// The scan runs once per segmenter; repeat calls return the memoized
    /// map. A document with no header matches yields an empty map.
    pub fn segment(&self) -> &SectionMap<V> {
        self.sections.get_or_init(|| self.scan())
    }

    fn scan(&self) -> SectionMap<V> {
        let mut sections = SectionMap::new();

        for caps in self.header_pattern.captures_iter(&self.document) {
            let Some(header) = caps.get(0) else { continue };

            // Content runs from the end of this header to the start of the
            // next match, or to the end of the document for the last header.
            let remainder = &self.document[header.end()..];
            let content_end = self
                .header_pattern
                .find(remainder)
                .map_or(remainder.len(), |next| next.start());
            let content = remainder[..content_end].trim_matches('\n');

            match &self.population {
                Population::Keyed { group, into_value } => {
                    // Group 0 selects the first captured sub-group; a group
                    // that did not participate falls back to the full match.
                    let key = caps
                        .get(group + 1)
                        .map_or(header.as_str(), |g| g.as_str());
                    sections.insert(key, into_value(content.to_string()));
                }
                Population::Custom(strategy) => {
                    strategy.populate(&mut sections, &caps, content);
                }
            }
        }

        sections
    }

    /// Renders every section's content through `renderer` using the
    /// configured format tag, producing a new map in the same order.
    ///
    /// # Errors
    ///
    /// Renderer failures propagate unmodified as `SegmentError::Render`.
    pub fn render(&self, renderer: &dyn MarkupRenderer) -> Result<SectionMap<String>>
    where
        V: AsRef<str>,
    {
        self.render_with(renderer, |content| content.as_ref())
    }

    /// Like [`Segmenter::render`], but with a caller-supplied transform from
    /// the stored value shape to the text handed to the renderer. Needed when
    /// a population strategy stores structured records instead of plain text.
    ///
    /// # Errors
    ///
    /// Renderer failures propagate unmodified as `SegmentError::Render`.
    pub fn render_with<F>(
        &self,
        renderer: &dyn MarkupRenderer,
        extract: F,
    ) -> Result<SectionMap<String>>
    where
        F: Fn(&V) -> &str,
    {
        let mut rendered = SectionMap::new();
        for (key, value) in self.segment().iter() {
            let output = renderer.render(&self.format, extract(value))?;
            rendered.insert(key, output);
        }
        Ok(rendered)
    }

    /// The format tag handed to the markup renderer.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    /// The raw document text.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_match_group_combined_with_strategy() {
        fn noop(_: &mut SectionMap<String>, _: &Captures<'_>, _: &str) {}

        let result = Segmenter::builder()
            .document("## 1.0.0\n\ndone\n")
            .match_group(1)
            .population_strategy(noop)
            .build();

        assert!(matches!(result, Err(SegmentError::Configuration(_))));
    }

    #[test]
    fn rejects_missing_document() {
        let result = Segmenter::builder().build();
        assert!(matches!(result, Err(SegmentError::Configuration(_))));
    }

    #[test]
    fn rejects_malformed_pattern_string() {
        let result = Segmenter::builder().header_pattern_str("([");
        assert!(matches!(result, Err(SegmentError::Pattern(_))));
    }

    #[test]
    fn no_header_matches_yields_empty_map() {
        let segmenter = Segmenter::new("just some prose\nwith no headers\n");
        assert!(segmenter.segment().is_empty());
    }

    #[test]
    fn adjacent_headers_yield_empty_content() {
        let segmenter = Segmenter::new("## 1.1.0\n## 1.0.0\n\nInitial release\n");
        let sections = segmenter.segment();
        assert_eq!(sections.get("1.1.0").map(String::as_str), Some(""));
        assert_eq!(
            sections.get("1.0.0").map(String::as_str),
            Some("Initial release")
        );
    }

    #[test]
    fn newline_only_content_normalizes_to_empty() {
        let segmenter = Segmenter::new("## 1.1.0\n\n\n\n## 1.0.0\n\nok\n");
        assert_eq!(segmenter.segment().get("1.1.0").map(String::as_str), Some(""));
    }

    #[test]
    fn internal_blank_lines_survive_trimming() {
        let segmenter = Segmenter::new("## 1.0.0\n\nfirst paragraph\n\nsecond paragraph\n");
        assert_eq!(
            segmenter.segment().get("1.0.0").map(String::as_str),
            Some("first paragraph\n\nsecond paragraph")
        );
    }

    #[test]
    fn repeat_calls_return_the_memoized_map() {
        let segmenter = Segmenter::new("## 1.0.0\n\ndone\n");
        let first = segmenter.segment();
        let second = segmenter.segment();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }
}
