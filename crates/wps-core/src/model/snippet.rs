use crate::sanitize::trim_words;

/// Number of words shown in a snippet listing preview
pub const PREVIEW_WORDS: usize = 15;

/// Snippet - a named block of sanitized HTML
///
/// Snippets are written only through `SnippetStore::put`, which guarantees
/// `name` is a non-empty slug and `html` is non-empty sanitized markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// Slug identifying the snippet; also its shortcode tag (`[name]`)
    pub name: String,

    /// Sanitized markup
    pub html: String,
}

impl Snippet {
    pub fn new(name: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            html: html.into(),
        }
    }

    /// Shortcode tag that expands to this snippet
    pub fn tag(&self) -> String {
        format!("[{}]", self.name)
    }

    /// Plain-text preview of the markup, cut after `max_words` words
    pub fn preview(&self, max_words: usize) -> String {
        trim_words(&self.html, max_words)
    }
}
