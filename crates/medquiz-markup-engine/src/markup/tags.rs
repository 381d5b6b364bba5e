//! The tags the compiler emits, in live and escaped form.
//!
//! Stages 2-5 write the escaped forms so the working string stays uniformly
//! escaped; [`own_tags`] is the allow-list the final stage turns back into
//! live markup. Nothing outside this list is ever re-opened.

use std::sync::OnceLock;

use super::color::Highlight;

/// A wrapper the compiler emits around matched content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapper {
    Bold,
    Italic,
    Highlight(Highlight),
}

impl Wrapper {
    pub fn escaped_open(self) -> String {
        match self {
            Wrapper::Bold => "&lt;strong&gt;".to_string(),
            Wrapper::Italic => "&lt;em&gt;".to_string(),
            Wrapper::Highlight(h) => h.escaped_open_tag(),
        }
    }

    pub fn escaped_close(self) -> &'static str {
        match self {
            Wrapper::Bold => "&lt;/strong&gt;",
            Wrapper::Italic => "&lt;/em&gt;",
            Wrapper::Highlight(_) => "&lt;/mark&gt;",
        }
    }

    /// Regex replacement template wrapping capture group `group`.
    pub(crate) fn template(self, group: usize) -> String {
        format!(
            "{}${{{group}}}{}",
            self.escaped_open(),
            self.escaped_close()
        )
    }
}

/// An (escaped, live) pair the final stage substitutes by exact match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnTag {
    pub escaped: String,
    pub live: String,
}

impl OwnTag {
    fn new(escaped: impl Into<String>, live: impl Into<String>) -> Self {
        Self {
            escaped: escaped.into(),
            live: live.into(),
        }
    }
}

/// The complete, finite allow-list of tags the compiler may re-open.
pub fn own_tags() -> &'static [OwnTag] {
    static OWN_TAGS: OnceLock<Vec<OwnTag>> = OnceLock::new();
    OWN_TAGS.get_or_init(|| {
        let mut tags = vec![
            OwnTag::new("&lt;strong&gt;", "<strong>"),
            OwnTag::new("&lt;/strong&gt;", "</strong>"),
            OwnTag::new("&lt;em&gt;", "<em>"),
            OwnTag::new("&lt;/em&gt;", "</em>"),
            OwnTag::new("&lt;/mark&gt;", "</mark>"),
        ];
        tags.extend(Highlight::all().map(|h| OwnTag::new(h.escaped_open_tag(), h.open_tag())));
        tags
    })
}
