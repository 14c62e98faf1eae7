//! JSDoc comment block parser.
//!
//! Splits the inner text of one `/** ... */` block into description,
//! `@param` entries and the return description.

use crate::model::*;
use crate::text::normalize;
use regex::Regex;
use std::sync::LazyLock;

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@[[:alpha:]]+").unwrap());

// Optional `{Type}` annotation, then `name`, `[name]` or `[name=default]`
static RE_PARAM_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\{[^}]*\}\s*)?(?:\[\s*([[:word:]]+)\s*(?:=[^\]]*)?\]|([[:word:]]+))").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Param,
    Return,
    Returns,
    /// `@chainable`, `@example`, ... — only ends a return payload
    Other,
}

impl TagKind {
    fn is_field(self) -> bool {
        self != TagKind::Other
    }
}

/// One `@tag` occurrence inside a block.
#[derive(Debug)]
struct Tag {
    kind: TagKind,
    /// Byte offset of the `@`
    start: usize,
    /// Byte offset where the payload begins
    body: usize,
}

/// Parse one comment block into a [`FunctionDoc`].
pub fn parse_block(block: &str, name: &str, sub_module: &str) -> FunctionDoc {
    let tags = find_tags(block);

    // Description and params run up to the next field tag; other tags stay in the text
    let field_end = |from: usize| {
        tags[from.min(tags.len())..]
            .iter()
            .find(|t| t.kind.is_field())
            .map_or(block.len(), |t| t.start)
    };
    let tag_end = |from: usize| tags.get(from).map_or(block.len(), |t| t.start);

    let description = normalize(block[..field_end(0)].trim());

    let mut params = Vec::new();
    for (i, tag) in tags.iter().enumerate() {
        if tag.kind != TagKind::Param {
            continue;
        }
        if let Some(param) = parse_param(&block[tag.body..field_end(i + 1)]) {
            params.push(param);
        }
    }

    let return_tag = tags
        .iter()
        .position(|t| t.kind == TagKind::Returns)
        .or_else(|| tags.iter().position(|t| t.kind == TagKind::Return));
    let returns = return_tag
        .map(|i| normalize(&block[tags[i].body..tag_end(i + 1)]))
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| NO_RETURN.to_string());

    FunctionDoc {
        name: name.to_string(),
        description,
        params,
        returns,
        sub_module: sub_module.to_string(),
    }
}

/// Locate tag markers: `@word` at the start of the block or after
/// whitespace / `*`, followed by whitespace or the end of the block.
fn find_tags(block: &str) -> Vec<Tag> {
    let mut tags = Vec::new();
    for whole in RE_TAG.find_iter(block) {
        let start = whole.start();

        let preceded_ok = block[..start]
            .chars()
            .next_back()
            .map_or(true, |c| c.is_whitespace() || c == '*');
        let rest = &block[whole.end()..];
        let followed_ok = rest.chars().next().map_or(true, char::is_whitespace);
        if !preceded_ok || !followed_ok {
            continue;
        }

        let kind = match &block[start + 1..whole.end()] {
            "param" => TagKind::Param,
            "return" => TagKind::Return,
            "returns" => TagKind::Returns,
            _ => TagKind::Other,
        };
        let body = whole.end() + (rest.len() - rest.trim_start().len());
        tags.push(Tag { kind, start, body });
    }
    tags
}

/// `{Type} [name] rest of description` → name + normalized description.
fn parse_param(payload: &str) -> Option<ParamDoc> {
    let caps = RE_PARAM_NAME.captures(payload)?;
    let name = caps.get(1).or_else(|| caps.get(2))?;
    let rest = &payload[caps.get(0)?.end()..];
    Some(ParamDoc {
        name: name.as_str().to_string(),
        description: normalize(rest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_block() {
        let block = " Draws a circle.\n * @param d diameter\n * @returns nothing\n ";
        let doc = parse_block(block, "circle", "basic");
        assert_eq!(doc.name, "circle");
        assert_eq!(doc.description, "Draws a circle.");
        assert_eq!(
            doc.params,
            vec![ParamDoc {
                name: "d".to_string(),
                description: "diameter".to_string()
            }]
        );
        assert_eq!(doc.returns, "nothing");
        assert_eq!(doc.sub_module, "basic");
    }

    #[test]
    fn parse_no_tags() {
        let doc = parse_block("\n * Just prose.\n ", "noop", "main");
        assert_eq!(doc.description, "Just prose.");
        assert!(doc.params.is_empty());
        assert_eq!(doc.returns, NO_RETURN);
    }

    #[test]
    fn parse_multiline_params_in_order() {
        let block = "\n * Sets fill.\n * @param v1 red or hue value\n *   relative to the color range\n * @param v2 green value\n * @param -- no name\n ";
        let doc = parse_block(block, "fill", "setting");
        let names: Vec<_> = doc.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["v1", "v2"]);
        assert_eq!(
            doc.params[0].description,
            "red or hue value relative to the color range"
        );
        assert_eq!(doc.returns, NO_RETURN);
    }

    #[test]
    fn parse_typed_param() {
        let doc = parse_block(" @param {Number} x x-coordinate\n", "point", "2d");
        assert_eq!(doc.params[0].name, "x");
        assert_eq!(doc.params[0].description, "x-coordinate");
    }

    #[test]
    fn parse_singular_return() {
        let doc = parse_block(" Gets it.\n * @return the value\n ", "get", "main");
        assert_eq!(doc.returns, "the value");
        assert_eq!(doc.description, "Gets it.");
    }

    #[test]
    fn plural_return_preferred() {
        let block = " X.\n * @return first\n * @returns second\n ";
        let doc = parse_block(block, "x", "main");
        assert_eq!(doc.returns, "second");
    }

    #[test]
    fn return_stops_at_any_tag() {
        let block = " X.\n * @returns the graphics\n *   object\n * @chainable\n ";
        let doc = parse_block(block, "x", "main");
        assert_eq!(doc.returns, "the graphics object");
    }

    #[test]
    fn param_stops_at_return() {
        let block = " X.\n * @param a first\n * @return result\n ";
        let doc = parse_block(block, "x", "main");
        assert_eq!(doc.params.len(), 1);
        assert_eq!(doc.params[0].description, "first");
        assert_eq!(doc.returns, "result");
    }

    #[test]
    fn inline_link_is_not_a_tag() {
        let block = " See {@link other} for details.\n * @returns value\n ";
        let doc = parse_block(block, "x", "main");
        assert!(doc.params.is_empty());
        assert_eq!(doc.description, "See {@link other} for details.");
        assert_eq!(doc.returns, "value");
    }

    #[test]
    fn email_like_text_is_not_a_tag() {
        let doc = parse_block(" Mail me@param.org\n ", "x", "main");
        assert!(doc.params.is_empty());
        assert_eq!(doc.description, "Mail me@param.org");
    }

    #[test]
    fn unknown_tags_stay_in_description_and_params() {
        let block = " Sets rate.\n * @deprecated use frameRate\n * instead.\n * @param fps frames\n * @chainable\n ";
        let doc = parse_block(block, "setFrameRate", "environment");
        assert_eq!(doc.description, "Sets rate. @deprecated use frameRate instead.");
        assert_eq!(doc.params.len(), 1);
        assert_eq!(doc.params[0].description, "frames @chainable");
        assert_eq!(doc.returns, NO_RETURN);
    }

    #[test]
    fn param_runs_past_unknown_tag_to_next_param() {
        let block = " X.\n * @param a first\n * @example a(1)\n * @param b second\n ";
        let doc = parse_block(block, "x", "main");
        assert_eq!(doc.params[0].description, "first @example a(1)");
        assert_eq!(doc.params[1].description, "second");
    }

    #[test]
    fn optional_params() {
        let block = " X.\n * @param [alpha] alpha value\n * @param {Number} [size=12] font size\n * @param [ v3 ] blue\n ";
        let doc = parse_block(block, "x", "main");
        let names: Vec<_> = doc.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["alpha", "size", "v3"]);
        assert_eq!(doc.params[0].description, "alpha value");
        assert_eq!(doc.params[1].description, "font size");
        assert_eq!(doc.params[2].description, "blue");
    }

    #[test]
    fn description_before_earliest_field_tag() {
        let block = " Desc.\n * @return r\n * @param p late\n ";
        let doc = parse_block(block, "x", "main");
        assert_eq!(doc.description, "Desc.");
        assert_eq!(doc.params.len(), 1);
    }

    #[test]
    fn empty_return_payload_is_void() {
        let doc = parse_block(" X.\n * @returns \n ", "x", "main");
        assert_eq!(doc.returns, NO_RETURN);
    }
}
