//! Description and diagram lookup for a module or component directory.

use std::path::{Path, PathBuf};

use crate::config::LayoutConfig;
use crate::error::{AutodocError, Result};
use crate::model::{Diagram, NodeDocs};

pub struct DocsResolver<'a> {
    config: &'a LayoutConfig,
}

impl<'a> DocsResolver<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    /// Resolve description and diagram of `dir`, substituting defaults for
    /// anything missing.
    pub fn resolve(&self, dir: &Path) -> Result<NodeDocs> {
        let description = self
            .read_description(dir)?
            .unwrap_or_else(|| self.config.default_description.clone());
        let diagram = self.find_diagram(dir).unwrap_or(Diagram::Default);

        Ok(NodeDocs {
            description,
            diagram,
        })
    }

    fn docs_dir(&self, dir: &Path) -> PathBuf {
        dir.join(&self.config.docs_dir)
    }

    /// Trimmed content of the description file, if one exists
    pub fn read_description(&self, dir: &Path) -> Result<Option<String>> {
        let path = self.docs_dir(dir).join(&self.config.description_file);
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| AutodocError::Read {
            path: path.clone(),
            source: e,
        })?;
        Ok(Some(content.trim().to_string()))
    }

    /// First diagram found, checking extensions in configured priority order
    pub fn find_diagram(&self, dir: &Path) -> Option<Diagram> {
        let docs = self.docs_dir(dir);
        self.config.diagram_extensions.iter().find_map(|ext| {
            let file_name = format!("{}.{}", self.config.diagram_stem, ext);
            let source = docs.join(&file_name);
            source.is_file().then_some(Diagram::Found { source, file_name })
        })
    }
}
