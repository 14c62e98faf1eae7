//! Data model for extracted documentation — format-agnostic.

use serde::Serialize;

/// Return text used when a comment block carries no return tag.
pub const NO_RETURN: &str = "void";

/// A single documented function or method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDoc {
    pub name: String,
    /// Normalized prose before the first field tag (may be empty)
    pub description: String,
    /// @param entries in declaration order
    pub params: Vec<ParamDoc>,
    /// @returns / @return payload, or [`NO_RETURN`]
    pub returns: String,
    /// File-level sub-category the function was found under
    pub sub_module: String,
}

/// Parsed @param entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDoc {
    pub name: String,
    pub description: String,
}

/// Functions extracted from one `// Inlined from:` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub category: String,
    pub sub_category: String,
    pub functions: Vec<FunctionDoc>,
}

/// All functions of one top-level category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDoc {
    pub name: String,
    pub functions: Vec<FunctionDoc>,
}

/// Category name → functions, in first-seen order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ModuleMap {
    modules: Vec<ModuleDoc>,
}

impl ModuleMap {
    /// Function list for `name`, created at the end of the map if absent.
    pub fn entry(&mut self, name: &str) -> &mut Vec<FunctionDoc> {
        let idx = match self.modules.iter().position(|m| m.name == name) {
            Some(idx) => idx,
            None => {
                self.modules.push(ModuleDoc {
                    name: name.to_string(),
                    functions: Vec::new(),
                });
                self.modules.len() - 1
            }
        };
        &mut self.modules[idx].functions
    }

    pub fn get(&self, name: &str) -> Option<&[FunctionDoc]> {
        self.modules
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.functions.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleDoc> {
        self.modules.iter()
    }

    /// Keep only the modules for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&ModuleDoc) -> bool) {
        self.modules.retain(|m| keep(m));
    }

    /// Drop modules left without functions.
    pub fn prune_empty(&mut self) {
        self.modules.retain(|m| !m.functions.is_empty());
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Number of functions across every module.
    pub fn total_functions(&self) -> usize {
        self.modules.iter().map(|m| m.functions.len()).sum()
    }
}

/// Caller-supplied values stamped into every rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub version: String,
    pub timestamp: String,
}
