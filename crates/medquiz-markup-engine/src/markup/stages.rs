use regex::Regex;
use std::sync::OnceLock;

use super::color::{Highlight, HighlightColor};
use super::tags::{Wrapper, own_tags};

/// Stage 1: escape `<`, `>` and any `&` that does not start a character reference.
pub fn escape(text: &str) -> String {
    static CHAR_REF: OnceLock<Regex> = OnceLock::new();
    let char_ref =
        CHAR_REF.get_or_init(|| Regex::new(r"&#?[A-Za-z0-9]+;").expect("Invalid char ref regex"));

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in char_ref.find_iter(text) {
        html_escape::encode_text_to_string(&text[last..m.start()], &mut out);
        out.push_str(m.as_str());
        last = m.end();
    }
    html_escape::encode_text_to_string(&text[last..], &mut out);
    out
}

/// Stage 2: `**…**` pairs, left to right, non-greedy.
pub fn bold(text: &str) -> String {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    let bold = BOLD.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex"));

    bold.replace_all(text, Wrapper::Bold.template(1)).into_owned()
}

/// Stage 3: `*…*` where the opening `*` is not preceded by another `*`, then `_…_`.
pub fn italic(text: &str) -> String {
    static STAR: OnceLock<Regex> = OnceLock::new();
    static UNDERSCORE: OnceLock<Regex> = OnceLock::new();
    let star = STAR
        .get_or_init(|| Regex::new(r"(^|[^*])\*([^*]+?)\*").expect("Invalid italic regex"));
    let underscore =
        UNDERSCORE.get_or_init(|| Regex::new(r"_(.+?)_").expect("Invalid italic regex"));

    // The character before the opening star is consumed by the match, so put it back.
    let star_template = format!("${{1}}{}", Wrapper::Italic.template(2));
    let text = star.replace_all(text, star_template.as_str());
    underscore
        .replace_all(&text, Wrapper::Italic.template(1))
        .into_owned()
}

/// Stage 4: `==…==` with the default background.
pub fn highlight(text: &str) -> String {
    static HIGHLIGHT: OnceLock<Regex> = OnceLock::new();
    let highlight =
        HIGHLIGHT.get_or_init(|| Regex::new(r"==(.+?)==").expect("Invalid highlight regex"));

    highlight
        .replace_all(text, Wrapper::Highlight(Highlight::Default).template(1))
        .into_owned()
}

/// Stage 5: `[color]…[/color]` for every color in the table, in table order.
///
/// Tag names match case-insensitively and content may span lines.
pub fn colored_spans(text: &str) -> String {
    static COLORED: OnceLock<Vec<(HighlightColor, Regex)>> = OnceLock::new();
    let colored = COLORED.get_or_init(|| {
        HighlightColor::ALL
            .into_iter()
            .map(|color| {
                let name = regex::escape(color.name());
                let re = Regex::new(&format!(r"(?is)\[{name}\](.*?)\[/{name}\]"))
                    .expect("Invalid colored span regex");
                (color, re)
            })
            .collect()
    });

    colored
        .iter()
        .fold(text.to_string(), |acc, (color, re)| {
            let template = Wrapper::Highlight(Highlight::Color(*color)).template(1);
            re.replace_all(&acc, template.as_str()).into_owned()
        })
}

/// Stage 6: turn the compiler's own escaped tags back into live markup.
///
/// Only exact matches from [`own_tags`] are replaced; every other escaped
/// sequence stays escaped.
pub fn reopen_own_tags(text: &str) -> String {
    own_tags()
        .iter()
        .fold(text.to_string(), |acc, tag| acc.replace(&tag.escaped, &tag.live))
}
