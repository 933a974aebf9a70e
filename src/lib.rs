//! logchop - extract per-version sections from free-form changelog text
//!
//! A header pattern (regex) is applied against the document; every match
//! opens a section whose content runs to the next match or the end of the
//! document. Sections land in an insertion-ordered map keyed by a captured
//! group of the header match, so mixed header conventions within a single
//! document all resolve to clean version keys.
//!
//! ```
//! use logchop::Segmenter;
//!
//! let doc = "## 1.1.0 / 2014-12-03\n\n* Add feature\n\n## 1.0.0\n\n* First stable\n";
//! let segmenter = Segmenter::new(doc);
//! let sections = segmenter.segment();
//!
//! assert_eq!(sections.get("1.1.0").map(String::as_str), Some("* Add feature"));
//! assert_eq!(sections.get("1.0.0").map(String::as_str), Some("* First stable"));
//! ```
//!
//! Key derivation and result population are pluggable: pick a different
//! capture group with [`SegmenterBuilder::match_group`], or take over result
//! writing entirely with a [`PopulateSections`] strategy. Rendering to markup
//! is delegated to an external engine behind the [`MarkupRenderer`] trait.

mod error;
mod patterns;
mod render;
mod segmenter;
mod types;

pub use error::{RenderError, SegmentError};
pub use patterns::DEFAULT_HEADER_PATTERN;
pub use render::{MarkupRenderer, RawRenderer};
pub use segmenter::{PopulateSections, Segmenter, SegmenterBuilder};
pub use types::{Result, SectionMap};
