//! Input sanitizers applied at the store boundary
//!
//! Snippet markup is the security-relevant path: everything an administrator
//! types ends up verbatim on storefront pages, so it goes through an
//! allow-list sanitizer. Rule fields are plain text and lose all markup.

use std::collections::HashSet;

use ammonia::Builder;

/// Tags whose content is dropped along with the tag itself
const CONTENT_STRIPPED_TAGS: [&str; 2] = ["script", "style"];

/// Attributes allowed on every tag in snippet markup, on top of ammonia's defaults
const SNIPPET_GENERIC_ATTRIBUTES: [&str; 2] = ["class", "id"];

/// Normalize a name into a URL/DOM-safe slug
///
/// Lowercases ASCII letters, keeps ASCII digits, and collapses every run of
/// other characters into a single hyphen. Leading and trailing hyphens are
/// removed, so the result is either empty or starts and ends alphanumeric.
///
/// ```
/// use wps_core::sanitize::slugify;
///
/// assert_eq!(slugify("  Shipping Notice!! "), "shipping-notice");
/// assert_eq!(slugify("[sale_badge]"), "sale-badge");
/// ```
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Reduce an identifier to lowercase `[a-z0-9_-]`
///
/// Used for rule ids, which end up inside a CSS class token.
pub fn sanitize_key(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| {
            let c = c.to_ascii_lowercase();
            (c.is_ascii_alphanumeric() || c == '_' || c == '-').then_some(c)
        })
        .collect()
}

/// Sanitize a single-line plain-text field
///
/// All tags are removed (script/style together with their content), the
/// remaining text is entity-escaped, whitespace runs collapse to one space and
/// the result is trimmed.
pub fn sanitize_text_field(input: &str) -> String {
    let cleaned = Builder::empty()
        .clean_content_tags(CONTENT_STRIPPED_TAGS.iter().copied().collect::<HashSet<_>>())
        .clean(input)
        .to_string();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Upper bound on sanitizer passes in `sanitize_html`
const MAX_CLEAN_PASSES: usize = 4;

/// Sanitize snippet markup against the post-content allow-list
///
/// Keeps ammonia's default tag set plus `class`/`id` attributes. Script and
/// style elements are removed with their content; event-handler attributes
/// and non-web URL schemes never survive.
///
/// Serialized output of mis-nested markup (an `<a>` inside a `<table>`, say)
/// can parse into a different tree the next time round, so the cleaner runs
/// until its output stops changing. Sanitizing already-sanitized markup
/// returns it unchanged.
pub fn sanitize_html(input: &str) -> String {
    let mut builder = Builder::default();
    builder.add_generic_attributes(SNIPPET_GENERIC_ATTRIBUTES.iter().copied());

    let mut current = builder.clean(input).to_string().trim().to_string();
    for _ in 1..MAX_CLEAN_PASSES {
        let next = builder.clean(&current).to_string().trim().to_string();
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Escape a value for use inside a double-quoted HTML attribute
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// First `max_words` words of the markup's text, with an ellipsis when cut
pub fn trim_words(html: &str, max_words: usize) -> String {
    let text = sanitize_text_field(html);
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return words.join(" ");
    }
    format!("{}\u{2026}", words[..max_words].join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("Free  --  Shipping"), "free-shipping");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify("ABC123"), "abc123");
        assert_eq!(slugify("Crème brûlée"), "cr-me-br-l-e");
    }

    #[test]
    fn test_sanitize_key_drops_other_characters() {
        assert_eq!(sanitize_key("Rule 7!"), "rule7");
        assert_eq!(sanitize_key("r_1-a"), "r_1-a");
        assert_eq!(sanitize_key("\"><script>"), "script");
    }

    #[test]
    fn test_text_field_strips_markup() {
        assert_eq!(sanitize_text_field("  <b>shoes</b>  "), "shoes");
        assert_eq!(sanitize_text_field("after\n\ttitle"), "after title");
        assert_eq!(sanitize_text_field("<script>alert(1)</script>hats"), "hats");
    }

    #[test]
    fn test_html_keeps_allowed_markup() {
        assert_eq!(sanitize_html("<b>Sale!</b>"), "<b>Sale!</b>");
        assert_eq!(
            sanitize_html(r#"<div class="note">Ships free</div>"#),
            r#"<div class="note">Ships free</div>"#
        );
    }

    #[test]
    fn test_html_removes_scripts_and_handlers() {
        let cleaned = sanitize_html(r#"<p onclick="steal()">Hi<script>alert(1)</script></p>"#);
        assert_eq!(cleaned, "<p>Hi</p>");

        let cleaned = sanitize_html(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!cleaned.contains("javascript"));

        assert_eq!(sanitize_html("<style>p{}</style>"), "");
    }

    #[test]
    fn test_html_misnested_anchor_is_stable() {
        let once = sanitize_html(r#"<a href="https://x.y"><table><a href="https://x.y">"#);
        assert_eq!(sanitize_html(&once), once);
        assert!(!once.contains("<a href=\"https://x.y\" rel=\"noopener noreferrer\"><a"));
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr(r#"a"b<c>&'"#), "a&quot;b&lt;c&gt;&amp;&#039;");
        assert_eq!(escape_attr("after_title"), "after_title");
    }

    #[test]
    fn test_trim_words() {
        assert_eq!(trim_words("<p>one two three</p>", 2), "one two\u{2026}");
        assert_eq!(trim_words("one two", 15), "one two");
    }
}
