//! Placeholder scanner for `{{...}}` syntax
//!
//! Finds placeholder regions in a document with their byte positions.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

// An inner brace ends the match early, so placeholders never nest.
#[allow(clippy::expect_used)]
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]+)\}\}").expect("placeholder pattern is valid"));

/// A placeholder found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// The full match, braces included.
    pub text: &'a str,

    /// The captured content between the braces.
    pub inner: &'a str,

    /// Byte range of `text` in the scanned document.
    pub span: Range<usize>,
}

/// Lazily yields every placeholder in `document`, left to right and
/// non-overlapping.
///
/// # Examples
///
/// ```
/// use tplr_application::template::scan;
///
/// let found: Vec<_> = scan("a={{aws:ssm:/x}} b={{name}}").map(|p| p.inner).collect();
/// assert_eq!(found, vec!["aws:ssm:/x", "name"]);
/// ```
pub fn scan(document: &str) -> impl Iterator<Item = Placeholder<'_>> {
    PLACEHOLDER_REGEX.captures_iter(document).filter_map(|captures| {
        let whole = captures.get(0)?;
        let inner = captures.get(1)?;
        Some(Placeholder {
            text: whole.as_str(),
            inner: inner.as_str(),
            span: whole.range(),
        })
    })
}

/// Returns true if the document contains at least one placeholder.
#[must_use]
pub fn has_placeholders(document: &str) -> bool {
    PLACEHOLDER_REGEX.is_match(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn inners(document: &str) -> Vec<&str> {
        scan(document).map(|p| p.inner).collect()
    }

    #[test]
    fn test_scan_single() {
        let found: Vec<_> = scan("{{aws:ssm:/a}}").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "{{aws:ssm:/a}}");
        assert_eq!(found[0].inner, "aws:ssm:/a");
        assert_eq!(found[0].span, 0..14);
    }

    #[test]
    fn test_scan_adjacent() {
        assert_eq!(inners("{{a}}{{b}}{{c}}"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_no_placeholders() {
        assert!(inners("plain text, {single} braces").is_empty());
        assert!(!has_placeholders("plain text"));
    }

    #[test]
    fn test_empty_braces_do_not_match() {
        assert!(inners("{{}}").is_empty());
    }

    #[test]
    fn test_unclosed() {
        assert!(inners("{{aws:ssm:/a").is_empty());
        assert!(inners("aws:ssm:/a}}").is_empty());
    }

    #[test]
    fn test_nested_degrades_to_innermost() {
        let document = "{{aws:ssm:/app/{{env}}/db}}";
        let found: Vec<_> = scan(document).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].inner, "env");
        assert_eq!(&document[found[0].span.clone()], "{{env}}");
    }

    #[test]
    fn test_triple_braces() {
        // The leading brace is not part of the match.
        let found: Vec<_> = scan("{{{x}}}").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "{{x}}");
        assert_eq!(found[0].span, 1..6);
    }

    #[test]
    fn test_spans_index_document() {
        let document = "host={{aws:ssm:/h}}\nport={{aws:ssm:/p}}\n";
        for placeholder in scan(document) {
            assert_eq!(&document[placeholder.span.clone()], placeholder.text);
        }
    }

    #[test]
    fn test_multiline_inner() {
        assert_eq!(inners("{{a\nb}}"), vec!["a\nb"]);
    }
}
