// File: crates/chart-render-svg/src/escape.rs
// Summary: Minimal XML/HTML escaping via numeric character references.

/// Numeric character reference for `c`, e.g. `&#34;` for `"`.
pub fn entity(c: char) -> String {
    format!("&#{};", c as u32)
}

/// Escape text for an attribute value: `"`, `&`, and angle brackets.
pub fn escape_attr(s: &str) -> String {
    escape(s, &['"', '&', '<', '>'])
}

/// Escape text for an element body: `&` and angle brackets.
pub fn escape_text(s: &str) -> String {
    escape(s, &['&', '<', '>'])
}

fn escape(s: &str, specials: &[char]) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if specials.contains(&c) {
            out.push_str(&entity(c));
        } else {
            out.push(c);
        }
    }
    out
}
