//! The `[pages]` tag surface.
//!
//! Attribute parsing accepts `name=value` pairs with double-quoted,
//! single-quoted, or bare values. Attribute names are lowercased; malformed
//! fragments are skipped rather than reported. [`expand`] rewrites a whole
//! document, replacing every `[pages ...]` occurrence with its rendered
//! fragment.

use std::collections::BTreeMap;

use crate::render::Renderer;

/// Caller-supplied shortcode attributes. Unknown keys are carried but
/// ignored by the resolver.
pub type Attrs = BTreeMap<String, String>;

/// The registered tag name.
pub const TAG: &str = "pages";

/// Parse the attribute portion of a tag body.
pub fn parse_attrs(input: &str) -> Attrs {
    let mut attrs = Attrs::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        let name_end = rest
            .find(|c: char| c == '=' || c.is_whitespace())
            .unwrap_or(rest.len());
        let name = rest[..name_end].to_ascii_lowercase();
        rest = &rest[name_end..];

        let value = match rest.strip_prefix('=') {
            Some(after_eq) => {
                let (value, remainder) = read_value(after_eq);
                rest = remainder;
                Some(value)
            }
            None => None,
        };

        if !name.is_empty() {
            if let Some(value) = value {
                attrs.insert(name, value);
            }
        }

        rest = rest.trim_start();
    }

    attrs
}

fn read_value(input: &str) -> (String, &str) {
    for quote in ['"', '\''] {
        if let Some(rest) = input.strip_prefix(quote) {
            return match rest.find(quote) {
                Some(end) => (rest[..end].to_string(), &rest[end + 1..]),
                None => (rest.to_string(), ""),
            };
        }
    }

    let end = input.find(char::is_whitespace).unwrap_or(input.len());
    (input[..end].to_string(), &input[end..])
}

/// Replace every `[pages ...]` occurrence in `document` with its rendered
/// fragment. Unterminated tags and longer tag names (`[pagesque]`) pass
/// through unchanged.
pub fn expand(document: &str, renderer: &Renderer) -> String {
    let mut out = String::with_capacity(document.len());
    let mut rest = document;
    let open = format!("[{}", TAG);

    while let Some(start) = rest.find(&open) {
        let after = &rest[start + open.len()..];
        let at_boundary = after.starts_with(']')
            || after
                .chars()
                .next()
                .map(|c| c.is_whitespace())
                .unwrap_or(false);

        if !at_boundary {
            out.push_str(&rest[..start + open.len()]);
            rest = after;
            continue;
        }

        match after.find(']') {
            Some(close) => {
                out.push_str(&rest[..start]);
                let attrs = parse_attrs(&after[..close]);
                out.push_str(&renderer.shortcode(&attrs));
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[..start + open.len()]);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
