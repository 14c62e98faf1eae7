//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the extracted model directly, one document per module plus
//! an index summarizing the counts.

use crate::model::*;
use crate::render::{Project, Renderer};
use serde::Serialize;

pub struct JsonRenderer {
    project: Project,
}

impl JsonRenderer {
    pub fn new(project: Project) -> Self {
        JsonRenderer { project }
    }
}

#[derive(Serialize)]
struct ModuleJson<'a> {
    library: &'a str,
    module: &'a str,
    version: &'a str,
    timestamp: &'a str,
    functions: &'a [FunctionDoc],
}

#[derive(Serialize)]
struct IndexJson<'a> {
    library: &'a str,
    version: &'a str,
    timestamp: &'a str,
    modules: Vec<ModuleCount<'a>>,
    total: usize,
}

#[derive(Serialize)]
struct ModuleCount<'a> {
    name: &'a str,
    functions: usize,
}

impl Renderer for JsonRenderer {
    fn render_module(&self, name: &str, functions: &[FunctionDoc], meta: &Metadata) -> String {
        to_json(&ModuleJson {
            library: &self.project.library,
            module: name,
            version: &meta.version,
            timestamp: &meta.timestamp,
            functions,
        })
    }

    fn render_index(&self, modules: &ModuleMap, meta: &Metadata) -> String {
        to_json(&IndexJson {
            library: &self.project.library,
            version: &meta.version,
            timestamp: &meta.timestamp,
            modules: modules
                .iter()
                .map(|m| ModuleCount {
                    name: &m.name,
                    functions: m.functions.len(),
                })
                .collect(),
            total: modules.total_functions(),
        })
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    let mut out = serde_json::to_string_pretty(value)
        .expect("string-keyed structs always serialize to JSON");
    out.push('\n');
    out
}
