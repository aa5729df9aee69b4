/// Escapes a string for HTML element content.
pub(super) fn escape_text(src: &str) -> String {
    escape(src, false)
}

/// Escapes a string for a double-quoted HTML attribute value.
pub(super) fn escape_attr(src: &str) -> String {
    escape(src, true)
}

fn escape(src: &str, quote: bool) -> String {
    let mut out = String::with_capacity(src.len());
    for c in src.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quote => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
