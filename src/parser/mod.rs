//! Section scanner — splits a bundled `.d.ts` into `// Inlined from:`
//! sections and pairs each JSDoc block with the signature that follows it.

pub mod jsdoc;
pub mod merge;

use crate::model::*;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, trace};

// -- Regex patterns -----------------------------------------------------------

/// `// Inlined from: ./src/<category>/<sub>.d.ts` — the body starts after the line break.
static RE_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"// Inlined from: \./src/([^/\n]+)/([^/\n]+)\.d\.ts[ \t\r]*\n").unwrap()
});

/// Any marker line ends the previous section, recognized path or not.
const SECTION_BREAK: &str = "\n// Inlined from:";

/// `/** ... */` followed by `function name(...)`.
///
/// The block body can never contain `*/`, so a comment that is not directly
/// followed by a signature (a property, a constant) is never glued onto the
/// next one.
static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"/\*\*((?:[^*]|\*+[^*/])*)\*+/\s*\n\s*",
        r"(?:export\s+)?(?:declare\s+)?function\s+([[:word:]]+)\s*\([^)]*\)\s*[:;{]"
    ))
    .unwrap()
});

/// `/** ... */` followed by a member signature `name(...)`.
static RE_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"/\*\*((?:[^*]|\*+[^*/])*)\*+/\s*\n\s*",
        r"(?:export\s+)?([[:word:]]+)\s*\([^)]*\)\s*[:;{]"
    ))
    .unwrap()
});

// -- Public API ---------------------------------------------------------------

/// Scan the whole source and group the extracted functions by category.
pub fn scan(source: &str) -> ModuleMap {
    merge::merge(sections(source))
}

/// Split `source` into marked sections and extract each one's functions.
///
/// Sections are returned in source order, including those without any
/// documented function.
pub fn sections(source: &str) -> Vec<Section> {
    let mut result = Vec::new();
    let mut pos = 0;

    while let Some(caps) = RE_SECTION.captures_at(source, pos) {
        let (Some(marker), Some(category), Some(sub_category)) =
            (caps.get(0), caps.get(1), caps.get(2))
        else {
            break;
        };

        let body_start = marker.end();
        let body_end = source[body_start..]
            .find(SECTION_BREAK)
            .map_or(source.len(), |offset| body_start + offset);

        let functions = extract_functions(&source[body_start..body_end], sub_category.as_str());
        debug!(
            category = category.as_str(),
            sub_category = sub_category.as_str(),
            functions = functions.len(),
            "scanned section"
        );

        result.push(Section {
            category: category.as_str().to_string(),
            sub_category: sub_category.as_str().to_string(),
            functions,
        });
        pos = body_end;
    }

    result
}

/// Extract documented callables from one section body.
///
/// `function` declarations are matched first; the broader member pass only
/// adds names the first pass did not produce.
pub fn extract_functions(body: &str, sub_category: &str) -> Vec<FunctionDoc> {
    let mut functions = Vec::new();
    let mut seen = HashSet::new();

    for pattern in [&*RE_FUNCTION, &*RE_METHOD] {
        for caps in pattern.captures_iter(body) {
            let (Some(block), Some(name)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let name = name.as_str();
            if !seen.insert(name.to_string()) {
                trace!(name, sub_category, "skipping duplicate");
                continue;
            }
            functions.push(jsdoc::parse_block(block.as_str(), name, sub_category));
        }
    }

    functions
}
