//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod vimdoc;

use crate::model::{FunctionDoc, Metadata, ModuleMap};
use anyhow::{anyhow, Result};

/// Trait for rendering extracted documentation into a specific output format.
pub trait Renderer {
    /// One document for a single category.
    fn render_module(&self, name: &str, functions: &[FunctionDoc], meta: &Metadata) -> String;
    /// The cross-category index.
    fn render_index(&self, modules: &ModuleMap, meta: &Metadata) -> String;
    fn file_extension(&self) -> &str;
}

/// Naming used in headers, tags and banners.
#[derive(Debug, Clone)]
pub struct Project {
    /// Help-tag namespace, e.g. `p5`
    pub namespace: String,
    /// Display name, e.g. `p5.js`
    pub library: String,
}

impl Default for Project {
    fn default() -> Self {
        Project {
            namespace: "p5".to_string(),
            library: "p5.js".to_string(),
        }
    }
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, project: Project) -> Result<Box<dyn Renderer>> {
    match format {
        "vimdoc" | "vim" | "help" => Ok(Box::new(vimdoc::VimdocRenderer::new(project))),
        "json" => Ok(Box::new(json::JsonRenderer::new(project))),
        _ => Err(anyhow!("unknown format: {}. Use vimdoc or json", format)),
    }
}

/// Decoration shown next to a category name.
pub fn module_emoji(name: &str) -> &'static str {
    match name {
        "accessibility" => "♿",
        "color" => "🎨",
        "core" => "⚙️",
        "data" => "📊",
        "dom" => "🌐",
        "events" => "🖱️",
        "image" => "🖼️",
        "io" => "📁",
        "math" => "🔢",
        "typography" => "📝",
        "utilities" => "🛠️",
        "webgl" => "🎮",
        _ => "📚",
    }
}
