//! # Markup Compiler
//!
//! Turns the inline annotation syntax used in question banks into HTML that
//! can be inserted into a page without further sanitization.
//!
//! ## Syntax
//!
//! | Source | Output |
//! |--------|--------|
//! | `**bold**` | `<strong>bold</strong>` |
//! | `*italic*`, `_italic_` | `<em>italic</em>` |
//! | `==note==` | `<mark>` with the default amber background |
//! | `[red]…[/red]` | `<mark>` with the color's background (see [`HighlightColor`]) |
//!
//! ## Pipeline
//!
//! ```text
//! escape → bold → italic → highlight → colored spans → reopen own tags
//! ```
//!
//! The order is fixed. Everything is escaped first, the markup stages write
//! their wrappers in escaped form, and only the last stage produces live tags,
//! from the finite allow-list in [`tags::own_tags`]. A `<script>` in the input
//! therefore always comes out as inert text.
//!
//! Malformed markup is not an error: unmatched delimiters are left in the
//! output as literal text.
//!
//! ## Modules
//!
//! - **`color`**: `HighlightColor` table and `Highlight` open tags
//! - **`tags`**: emitted wrappers and the re-open allow-list
//! - **`stages`**: one pure `&str -> String` function per pipeline step

pub mod color;
pub mod stages;
pub mod tags;

use std::fmt;

pub use color::{DEFAULT_HIGHLIGHT, Highlight, HighlightColor, UnknownColor};

/// Identifies a pipeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    Escape,
    Bold,
    Italic,
    Highlight,
    ColoredSpans,
    ReopenOwnTags,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StageKind::Escape => "escape",
            StageKind::Bold => "bold",
            StageKind::Italic => "italic",
            StageKind::Highlight => "highlight",
            StageKind::ColoredSpans => "colored_spans",
            StageKind::ReopenOwnTags => "reopen_own_tags",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy)]
pub struct Stage {
    pub kind: StageKind,
    pub run: fn(&str) -> String,
}

/// The compiler's stages, in the order they must run.
pub const PIPELINE: [Stage; 6] = [
    Stage {
        kind: StageKind::Escape,
        run: stages::escape,
    },
    Stage {
        kind: StageKind::Bold,
        run: stages::bold,
    },
    Stage {
        kind: StageKind::Italic,
        run: stages::italic,
    },
    Stage {
        kind: StageKind::Highlight,
        run: stages::highlight,
    },
    Stage {
        kind: StageKind::ColoredSpans,
        run: stages::colored_spans,
    },
    Stage {
        kind: StageKind::ReopenOwnTags,
        run: stages::reopen_own_tags,
    },
];

/// Compiles markup source into safe HTML.
///
/// Total and pure: every input has an output, the empty string maps to the
/// empty string, and the same input always yields the same output.
pub fn compile(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    PIPELINE.iter().fold(text.to_string(), |acc, stage| {
        let next = (stage.run)(&acc);
        log::trace!("{}: {} -> {} bytes", stage.kind, acc.len(), next.len());
        next
    })
}
