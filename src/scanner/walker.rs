use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LayoutConfig;
use crate::error::Result;

/// Walks a component directory for files that may carry documentation comments
pub struct FileWalker<'a> {
    config: &'a LayoutConfig,
}

impl<'a> FileWalker<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    /// All candidate files under `root`, at any depth, sorted by path.
    pub fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type().is_file() && self.is_supported(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    pub fn is_supported(&self, path: &Path) -> bool {
        self.config.is_source_file(path)
    }
}
