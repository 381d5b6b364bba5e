use std::fmt;
use std::str::FromStr;

/// Background used by `==highlight==` spans (amber).
pub const DEFAULT_HIGHLIGHT: &str = "#fde68a";

/// The closed set of colors accepted by `[name]…[/name]` spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightColor {
    Yellow,
    Green,
    Blue,
    Red,
    Purple,
}

impl HighlightColor {
    /// Every color, in the order the colored-span stage applies them.
    pub const ALL: [HighlightColor; 5] = [
        HighlightColor::Yellow,
        HighlightColor::Green,
        HighlightColor::Blue,
        HighlightColor::Red,
        HighlightColor::Purple,
    ];

    /// Tag name as written in source text, e.g. `red` for `[red]…[/red]`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Purple => "purple",
        }
    }

    /// CSS background value for the span.
    pub fn background(self) -> &'static str {
        match self {
            Self::Yellow => "#fef08a",
            Self::Green => "#bbf7d0",
            Self::Blue => "#bfdbfe",
            Self::Red => "#fecaca",
            Self::Purple => "#e9d5ff",
        }
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown highlight color: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for HighlightColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

/// Which background a `<mark>` wrapper carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// `==…==`
    Default,
    /// `[color]…[/color]`
    Color(HighlightColor),
}

impl Highlight {
    /// Every highlight the engine can emit: the default first, then the color table.
    pub fn all() -> impl Iterator<Item = Highlight> {
        std::iter::once(Highlight::Default).chain(HighlightColor::ALL.map(Highlight::Color))
    }

    pub fn background(self) -> &'static str {
        match self {
            Highlight::Default => DEFAULT_HIGHLIGHT,
            Highlight::Color(color) => color.background(),
        }
    }

    /// The live open tag, e.g. `<mark style="background-color: #fde68a">`.
    pub fn open_tag(self) -> String {
        format!("<mark style=\"background-color: {}\">", self.background())
    }

    /// The open tag as it appears inside the escaped working string.
    pub fn escaped_open_tag(self) -> String {
        format!("&lt;mark style=\"background-color: {}\"&gt;", self.background())
    }
}
