//! Pure formatting helpers shared by both rule sets.

use crate::collab::MorseSymbol;

/// Narrow no-break space, used between a value and its unit.
pub const NARROW_NBSP: &str = "&#8239;";
/// Regular no-break space.
pub const NBSP: &str = "&#160;";

/// Units that attach to the value without a space.
const ATTACHED_UNITS: &[&str] = &["°", "%"];

/// Typable unit spellings and their preferred glyph.
const UNIT_GLYPHS: &[(&str, &str)] = &[("Ohm", "Ω")];

/// Preferred representation of a unit as typed by an author.
pub fn unit_glyph(unit: &str) -> &str {
    UNIT_GLYPHS
        .iter()
        .find(|(typed, _)| *typed == unit)
        .map_or(unit, |&(_, glyph)| glyph)
}

/// Format a value with its (optionally prefixed) unit.
///
/// ```
/// use fiftyohm_html::render::format_unit;
///
/// assert_eq!(format_unit("5", "k", "Ohm"), "5&#8239;kΩ");
/// assert_eq!(format_unit("10", "", "%"), "10%");
/// ```
pub fn format_unit(value: &str, prefix: &str, unit: &str) -> String {
    let symbol = format!("{prefix}{}", unit_glyph(unit));
    if ATTACHED_UNITS.contains(&unit) {
        format!("{value}{symbol}")
    } else {
        format!("{value}{NARROW_NBSP}{symbol}")
    }
}

/// No-break space if `present`, nothing otherwise.
pub fn nbsp_if(present: bool) -> &'static str {
    if present { NBSP } else { "" }
}

/// Visual Morse code: one span per character, one span per symbol.
pub fn morse_markup(chars: &[Vec<MorseSymbol>]) -> String {
    let mut out = String::from("<span class=\"morse\">");
    for symbols in chars {
        out.push_str("<span class=\"morse_char\">\n");
        for symbol in symbols {
            out.push_str("<span class=\"morse_symbol\">\n");
            out.push_str(match symbol {
                MorseSymbol::Dit => "▄",
                MorseSymbol::Dah => "▄▄▄",
                MorseSymbol::Gap => "&nbsp;",
            });
            out.push_str("</span>\n");
        }
        out.push_str("</span>\n");
    }
    out.push_str("</span>");
    out
}

/// Escape text for a single-quoted JavaScript string inside an HTML
/// attribute.
///
/// Entities are decoded before the script runs: JavaScript escaping comes
/// first, HTML escaping second.
pub fn escape_js_attr(s: &str) -> String {
    let mut js = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => js.push_str("\\\\"),
            '\'' => js.push_str("\\'"),
            '\n' => js.push_str("\\n"),
            '\r' => js.push_str("\\r"),
            _ => js.push(c),
        }
    }
    escape_html(&js)
}

/// Escape special HTML characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_with_glyph_and_narrow_space() {
        assert_eq!(format_unit("5", "", "Ohm"), "5&#8239;Ω");
        assert_eq!(format_unit("2,2", "M", "Ohm"), "2,2&#8239;MΩ");
        assert_eq!(format_unit("145", "M", "Hz"), "145&#8239;MHz");
    }

    #[test]
    fn test_attached_units() {
        assert_eq!(format_unit("10", "", "%"), "10%");
        assert_eq!(format_unit("90", "", "°"), "90°");
    }

    #[test]
    fn test_nbsp_lookup() {
        assert_eq!(nbsp_if(false), "");
        assert_eq!(nbsp_if(true), "&#160;");
    }

    #[test]
    fn test_morse_markup_structure() {
        let html = morse_markup(&[vec![MorseSymbol::Dit, MorseSymbol::Gap, MorseSymbol::Dah]]);
        assert!(html.starts_with("<span class=\"morse\"><span class=\"morse_char\">\n"));
        assert_eq!(html.matches("<span class=\"morse_symbol\">").count(), 3);
        assert!(html.contains("<span class=\"morse_symbol\">\n▄</span>\n"));
        assert!(html.contains("<span class=\"morse_symbol\">\n▄▄▄</span>\n"));
        assert!(html.contains("<span class=\"morse_symbol\">\n&nbsp;</span>\n"));
        assert!(html.ends_with("</span>\n</span>"));
    }

    #[test]
    fn test_escape_js_attr() {
        assert_eq!(escape_js_attr("fig-dipol"), "fig-dipol");
        assert_eq!(escape_js_attr("o'neil"), "o\\&#39;neil");
        assert_eq!(escape_js_attr(r"a\b"), r"a\\b");
        assert_eq!(escape_js_attr("a\"b<c"), "a&quot;b&lt;c");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Hello"), "Hello");
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#"Say "hi""#), "Say &quot;hi&quot;");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }
}
