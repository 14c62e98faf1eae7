//! Vim help tag generation.
//!
//! Tags are namespaced as `<ns>-<module>-<name>`; `*tag*` defines a jump
//! target and `|tag|` links to one.

/// Build a help tag from its parts: `("p5", ["color", "fill"])` → `p5-color-fill`.
pub fn help_tag(namespace: &str, parts: &[&str]) -> String {
    let mut tag = sanitize(namespace);
    for part in parts {
        tag.push('-');
        tag.push_str(&sanitize(part));
    }
    tag
}

/// Jump target: `*tag*`.
pub fn anchor(tag: &str) -> String {
    format!("*{}*", tag)
}

/// Hot link: `|tag|`.
pub fn link(tag: &str) -> String {
    format!("|{}|", tag)
}

/// Table-of-contents entry for one function.
pub fn render_toc_item(name: &str, tag: &str) -> String {
    format!("  - {}()              {}", name, link(tag))
}

/// Capitalize the first character: `color` → `Color`.
pub fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Help tags may not contain whitespace or the `*`/`|` delimiters.
fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_whitespace() || c == '*' || c == '|' {
                '_'
            } else {
                c
            }
        })
        .collect()
}
