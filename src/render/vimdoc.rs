//! Vim help-file renderer (`:help` format, `ft=help`).

use crate::model::*;
use crate::render::{module_emoji, Project, Renderer};
use crate::text::{wrap, WRAP_WIDTH};
use crate::toc;

const RULE: &str =
    "==============================================================================";

const ATTRIBUTION: &str =
    "Generated by p5.nvim documentation generator <https://github.com/prjctimg/p5.nvim>";

const MODELINE: &str = "vim:tw=78:ts=8:ft=help:norl:";

pub struct VimdocRenderer {
    project: Project,
}

impl VimdocRenderer {
    pub fn new(project: Project) -> Self {
        VimdocRenderer { project }
    }

    fn tag(&self, parts: &[&str]) -> String {
        toc::help_tag(&self.project.namespace, parts)
    }

    /// Version and timestamp lines; the trailing `~` marks them as headings.
    fn stamp(&self, meta: &Metadata) -> String {
        format!(
            "📦 {} Version: {}~\n⏰ Last Updated: {}~",
            self.project.library, meta.version, meta.timestamp
        )
    }

    fn render_function(&self, module: &str, func: &FunctionDoc) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(String::new());
        lines.push(spaced(
            &format!("`{}()`", func.name),
            44,
            &toc::anchor(&self.tag(&[module, func.name.as_str()])),
        ));
        lines.push(String::new());
        lines.push(wrap(&func.description, WRAP_WIDTH));

        if !func.params.is_empty() {
            lines.push(String::new());
            lines.push("#### Parameters:".to_string());
            lines.push(String::new());
            for param in &func.params {
                let line = format!("    {}  {}", param.name, param.description);
                lines.push(line.trim_end().to_string());
            }
        }

        let returns = if func.returns.is_empty() {
            NO_RETURN
        } else {
            func.returns.as_str()
        };
        lines.push(String::new());
        lines.push("#### Returns:".to_string());
        lines.push(String::new());
        lines.push(format!("    {}", returns));
        lines.push(String::new());

        let sub_module = if func.sub_module.is_empty() {
            "main"
        } else {
            func.sub_module.as_str()
        };
        lines.push(format!("📂 *Sub-module: {}*", sub_module));
        lines.push(String::new());
        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

impl Renderer for VimdocRenderer {
    fn render_module(&self, name: &str, functions: &[FunctionDoc], meta: &Metadata) -> String {
        let library = &self.project.library;
        let functions_tag = self.tag(&[name, "functions"]);
        let mut out = String::new();

        // Header
        out.push_str(&spaced(
            &toc::anchor(&self.tag(&[name])),
            41,
            &format!("{} {} docs", library, name),
        ));
        out.push_str("\n\n");
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&spaced(
            "Table of Contents",
            27,
            &toc::anchor(&self.tag(&[name, "table-of-contents"])),
        ));
        out.push_str("\n\n");

        // Table of contents
        out.push_str(&spaced("1. Functions", 48, &toc::link(&functions_tag)));
        out.push('\n');
        for func in functions {
            out.push_str(&toc::render_toc_item(&func.name, &self.tag(&[name, func.name.as_str()])));
            out.push('\n');
        }
        out.push('\n');

        // Banner
        out.push_str(&format!(
            "{} {} module for {}\n\n",
            module_emoji(name),
            toc::title_case(name),
            library
        ));
        out.push_str(&self.stamp(meta));
        out.push_str("\n\n");

        // Body
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&spaced("2. Functions", 48, &toc::anchor(&functions_tag)));
        out.push_str("\n\n");
        let docs: Vec<String> = functions
            .iter()
            .map(|func| self.render_function(name, func))
            .collect();
        out.push_str(&docs.join("\n"));
        out.push('\n');

        push_footer(&mut out);
        out
    }

    fn render_index(&self, modules: &ModuleMap, meta: &Metadata) -> String {
        let ns = &self.project.namespace;
        let library = &self.project.library;
        let available_tag = self.tag(&["modules", "available"]);
        let mut out = String::new();

        out.push_str(&spaced(
            &toc::anchor(&self.tag(&["modules"])),
            41,
            &format!("{} modules index", library),
        ));
        out.push_str("\n\n");
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&spaced(
            "Table of Contents",
            34,
            &toc::anchor(&self.tag(&["modules", "table-of-contents"])),
        ));
        out.push_str("\n\n");
        out.push_str(&spaced("1. Available Modules", 38, &toc::link(&available_tag)));
        out.push_str("\n\n");

        out.push_str(&format!("📚 {} Modules Documentation\n\n", library));
        out.push_str(&self.stamp(meta));
        out.push_str("\n\n");

        out.push_str(RULE);
        out.push('\n');
        out.push_str(&spaced("1. Available Modules", 38, &toc::anchor(&available_tag)));
        out.push_str("\n\n");

        let summary: Vec<String> = modules
            .iter()
            .map(|m| {
                format!(
                    "- {} {}.{} - {} functions",
                    module_emoji(&m.name),
                    ns,
                    m.name,
                    m.functions.len()
                )
            })
            .collect();
        out.push_str(&summary.join("\n"));
        out.push_str("\n\n");

        out.push_str(&format!(
            "Total: {} functions across {} modules\n\n",
            modules.total_functions(),
            modules.len()
        ));

        push_footer(&mut out);
        out
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}

/// `left`, `gap` spaces, `right`.
fn spaced(left: &str, gap: usize, right: &str) -> String {
    format!("{}{}{}", left, " ".repeat(gap), right)
}

fn push_footer(out: &mut String) {
    out.push_str(RULE);
    out.push('\n');
    out.push_str(ATTRIBUTION);
    out.push_str("\n\n");
    out.push_str(MODELINE);
    out.push('\n');
}
