//! Cross-section merge: combine sections that share a top-level category.
//!
//! A bundled `.d.ts` inlines one file per sub-module (`color/setting.d.ts`,
//! `color/creating_reading.d.ts`, ...). Each category becomes one output
//! document, so its sections are folded into a single function list.

use crate::model::*;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Merge sections into a [`ModuleMap`].
///
/// Category order is the order in which categories first appear; functions
/// keep their section order. A name already present in the category is
/// dropped. Categories without functions are left out.
pub fn merge(sections: Vec<Section>) -> ModuleMap {
    let mut map = ModuleMap::default();
    let mut seen: HashMap<String, HashSet<String>> = HashMap::new();

    for section in sections {
        if section.functions.is_empty() {
            continue;
        }

        let names = seen.entry(section.category.clone()).or_default();
        let functions = map.entry(&section.category);
        for func in section.functions {
            if !names.insert(func.name.clone()) {
                trace!(
                    category = section.category.as_str(),
                    sub_category = section.sub_category.as_str(),
                    name = func.name.as_str(),
                    "dropping duplicate across sections"
                );
                continue;
            }
            functions.push(func);
        }
    }

    map.prune_empty();
    map
}
