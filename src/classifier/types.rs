//! Module taxonomy types shared by both classification strategies

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named group of product functionality
///
/// Serializes to the wire format `{"module", "Description", "Submodules"}`.
/// Unknown fields are rejected when parsing remote responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Module {
    #[serde(rename = "module")]
    pub name: String,

    #[serde(rename = "Description")]
    pub description: String,

    /// Submodule name -> submodule description, in the order they were given
    #[serde(rename = "Submodules")]
    pub submodules: IndexMap<String, String>,
}

impl Module {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            submodules: IndexMap::new(),
        }
    }

    pub fn submodule(&self, name: &str) -> Option<&str> {
        self.submodules.get(name).map(String::as_str)
    }
}

/// Ordered sequence of modules; an empty result means nothing was classifiable
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationResult {
    modules: Vec<Module>,
}

impl ClassificationResult {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Looks up a module by name
    pub fn find(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|module| module.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Module> {
        self.modules.iter()
    }
}

impl<'a> IntoIterator for &'a ClassificationResult {
    type Item = &'a Module;
    type IntoIter = std::slice::Iter<'a, Module>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.iter()
    }
}

/// Insertion-ordered module accumulator
///
/// Names are unique: asking for an existing module returns it for mutation
/// instead of creating a second one. Modules keep the order in which they were
/// first requested.
#[derive(Debug, Default)]
pub(crate) struct ModuleSet {
    modules: Vec<Module>,
    index: HashMap<String, usize>,
}

impl ModuleSet {
    /// Returns the module with this name, inserting it first if needed
    ///
    /// The description is only used when the module is created.
    pub(crate) fn get_or_insert(&mut self, name: &str, description: &str) -> &mut Module {
        let position = match self.index.get(name) {
            Some(&position) => position,
            None => {
                self.modules.push(Module::new(name, description));
                self.index.insert(name.to_string(), self.modules.len() - 1);
                self.modules.len() - 1
            }
        };
        &mut self.modules[position]
    }

    pub(crate) fn into_result(self) -> ClassificationResult {
        ClassificationResult::new(self.modules)
    }
}
