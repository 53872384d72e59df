//! Shortcode expansion
//!
//! Every stored snippet is also a self-closing shortcode: `[name]` anywhere
//! in expanded text is replaced by the snippet's markup. Attributes after the
//! tag name (`[name size="l"]`) are accepted and ignored.

use std::collections::BTreeMap;

use crate::model::Snippet;

/// Registered shortcode tags and their markup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcodeRegistry {
    tags: BTreeMap<String, String>,
}

impl ShortcodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one tag per snippet
    pub fn from_snippets(snippets: impl IntoIterator<Item = Snippet>) -> Self {
        Self {
            tags: snippets
                .into_iter()
                .map(|snippet| (snippet.name, snippet.html))
                .collect(),
        }
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    /// Replace registered `[tag]` tokens in one left-to-right pass
    ///
    /// Inserted markup is not scanned again, so snippets that mention each
    /// other cannot recurse. Unregistered tags stay verbatim.
    pub fn expand(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(open) = rest.find('[') {
            out.push_str(&rest[..open]);
            let candidate = &rest[open..];

            match self.match_tag(candidate) {
                Some((html, consumed)) => {
                    out.push_str(html);
                    rest = &candidate[consumed..];
                }
                None => {
                    out.push('[');
                    rest = &candidate[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }

    /// Markup and byte length of the shortcode at the start of `candidate`
    fn match_tag<'s>(&'s self, candidate: &str) -> Option<(&'s str, usize)> {
        let close = candidate.find(']')?;
        let inner = &candidate[1..close];
        if inner.contains('[') {
            return None;
        }

        let tag = inner.split_whitespace().next()?;
        if inner.starts_with(char::is_whitespace) {
            return None;
        }

        self.tags
            .get(tag)
            .map(|html| (html.as_str(), close + 1))
    }
}
