//! Final encoding steps for built URLs.

/// Replaces every Unicode whitespace character with `%20`.
pub fn encode_whitespace(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        if c.is_whitespace() {
            out.push_str("%20");
        } else {
            out.push(c);
        }
    }
    out
}

/// HTML-escapes a URL for use inside a double-quoted attribute.
///
/// Escapes `&`, `"`, `<` and `>`; single quotes are left alone. Existing
/// entities are escaped again (`&amp;` becomes `&amp;amp;`).
pub fn escape_markup(url: &str) -> String {
    let mut out = String::with_capacity(url.len() + url.len() / 8);
    for c in url.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_becomes_percent_20() {
        assert_eq!(encode_whitespace("/a b\tc"), "/a%20b%20c");
        // NBSP and ideographic space count as whitespace too.
        assert_eq!(encode_whitespace("x\u{a0}y\u{3000}z"), "x%20y%20z");
        assert_eq!(encode_whitespace("/caf\u{e9}?q=1"), "/caf\u{e9}?q=1");
    }

    #[test]
    fn markup_escape_compat_mode() {
        assert_eq!(escape_markup("a=1&b=2"), "a=1&amp;b=2");
        assert_eq!(escape_markup("\"<x>'"), "&quot;&lt;x&gt;'");
        assert_eq!(escape_markup("&amp;"), "&amp;amp;");
    }
}
