use once_cell::sync::Lazy;
use regex::Regex;

/// Default version header pattern, matching the common changelog conventions:
///
/// - `#`/`##`/`###` markdown headers with a version-like token, e.g.
///   `## 1.2.3 / 2013-02-14` or `# 1.0.0-x.7.z.92`
/// - an optional ` / ` suffix carrying an ISO date, a `Month Day, Year` date
///   (with optional ordinal), or a bare label such as `Unreleased`
/// - setext headers, where the version line is underlined with `=` or `-`
///
/// The version token is capture group 1. The token must contain a dot and end
/// in an alphanumeric, which keeps prose lines and document titles like
/// `Changelog` from matching.
pub static DEFAULT_HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^#{0,3} ?([\w.-]+\.[0-9A-Za-z]+)( / (\d{4}-\d{2}-\d{2}|\w+ \d{1,2}(st|nd|rd|th)?, \d{4}|\w+))?\n?[=-]*",
    )
    .expect("failed to compile default header pattern")
});
