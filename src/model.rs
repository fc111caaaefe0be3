//! In-memory model of a documented source tree.
//!
//! Everything here is built fresh on each run by directory enumeration.

use std::path::PathBuf;

/// Documentation category of a source file, derived from its containing path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    UseCases,
    Services,
}

impl Category {
    /// Heading used for the category group
    pub fn heading(&self) -> &'static str {
        match self {
            Category::UseCases => "Use Cases",
            Category::Services => "Services",
        }
    }
}

/// A function name with its extracted documentation text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEntry {
    pub name: String,
    pub body: String,
}

impl DocEntry {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// Documentation extracted from one source file of a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDoc {
    /// Path relative to the component
    pub relative_path: PathBuf,
    pub category: Category,
    /// Display title, e.g. `Usecases > create`
    pub section_title: String,
    pub entries: Vec<DocEntry>,
}

/// Diagram attached to a module or component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagram {
    Found {
        /// Absolute path of the diagram in the source tree
        source: PathBuf,
        /// Original file name, e.g. `diagram.png`
        file_name: String,
    },
    /// No diagram present; the configured fallback image is referenced
    Default,
}

impl Diagram {
    /// File name the diagram gets inside the output images directory
    pub fn output_name(&self, owner: &str) -> Option<String> {
        match self {
            Diagram::Found { file_name, .. } => Some(format!("{}_{}", owner, file_name)),
            Diagram::Default => None,
        }
    }
}

/// Description and diagram shared by modules and components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDocs {
    pub description: String,
    pub diagram: Diagram,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Directory name as found on disk
    pub name: String,
    pub path: PathBuf,
    pub docs: NodeDocs,
    pub sources: Vec<SourceDoc>,
}

impl Component {
    pub fn sources_in(&self, category: Category) -> impl Iterator<Item = &SourceDoc> {
        self.sources.iter().filter(move |s| s.category == category)
    }

    pub fn entry_count(&self) -> usize {
        self.sources.iter().map(|s| s.entries.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub name: String,
    pub path: PathBuf,
    pub docs: NodeDocs,
    pub components: Vec<Component>,
}
