//! Module and component discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LayoutConfig;
use crate::error::{AutodocError, Result};

/// A directory found one level below a parent, with its on-disk name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDir {
    pub name: String,
    pub path: PathBuf,
}

/// Immediate subdirectories of `parent`, sorted by name.
pub fn child_dirs(parent: &Path) -> Result<Vec<NodeDir>> {
    let mut dirs = Vec::new();

    for entry in WalkDir::new(parent)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        dirs.push(NodeDir {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path().to_path_buf(),
        });
    }

    Ok(dirs)
}

pub struct TreeScanner<'a> {
    config: &'a LayoutConfig,
}

impl<'a> TreeScanner<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    /// Every directory directly under the source root is a module.
    pub fn modules(&self, src_root: &Path) -> Result<Vec<NodeDir>> {
        if !src_root.is_dir() {
            return Err(AutodocError::SourceNotFound(src_root.to_path_buf()));
        }
        child_dirs(src_root)
    }

    /// Components of a module: subdirectories of its components folder,
    /// excluding the docs folder. A module without a components folder is an
    /// error.
    pub fn components(&self, module_dir: &Path) -> Result<Vec<NodeDir>> {
        let components_dir = module_dir.join(&self.config.components_dir);
        if !components_dir.is_dir() {
            return Err(AutodocError::MissingComponents(components_dir));
        }

        Ok(child_dirs(&components_dir)?
            .into_iter()
            .filter(|dir| dir.name != self.config.docs_dir)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(dirs: &[NodeDir]) -> Vec<&str> {
        dirs.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_modules_sorted_and_files_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("shipping")).unwrap();
        fs::create_dir_all(temp_dir.path().join("billing")).unwrap();
        fs::write(temp_dir.path().join("README.md"), "# Root").unwrap();

        let config = LayoutConfig::default();
        let modules = TreeScanner::new(&config).modules(temp_dir.path()).unwrap();

        assert_eq!(names(&modules), vec!["billing", "shipping"]);
        assert_eq!(modules[0].path, temp_dir.path().join("billing"));
    }

    #[test]
    fn test_modules_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let config = LayoutConfig::default();
        let err = TreeScanner::new(&config)
            .modules(&temp_dir.path().join("nope"))
            .unwrap_err();

        assert!(matches!(err, AutodocError::SourceNotFound(_)));
    }

    #[test]
    fn test_components_exclude_docs() {
        let temp_dir = TempDir::new().unwrap();
        let module = temp_dir.path().join("billing");
        fs::create_dir_all(module.join("components/invoicing")).unwrap();
        fs::create_dir_all(module.join("components/docs")).unwrap();
        fs::create_dir_all(module.join("components/accounts")).unwrap();
        fs::write(module.join("components/notes.txt"), "x").unwrap();

        let config = LayoutConfig::default();
        let components = TreeScanner::new(&config).components(&module).unwrap();

        assert_eq!(names(&components), vec!["accounts", "invoicing"]);
    }

    #[test]
    fn test_missing_components_dir_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let module = temp_dir.path().join("billing");
        fs::create_dir_all(module.join("invoicing")).unwrap();

        let config = LayoutConfig::default();
        let err = TreeScanner::new(&config).components(&module).unwrap_err();

        match err {
            AutodocError::MissingComponents(path) => {
                assert_eq!(path, module.join("components"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_components_dir_name_is_configurable() {
        let temp_dir = TempDir::new().unwrap();
        let module = temp_dir.path().join("billing");
        fs::create_dir_all(module.join("parts/invoicing")).unwrap();

        let config = LayoutConfig {
            components_dir: "parts".to_string(),
            ..LayoutConfig::default()
        };
        let components = TreeScanner::new(&config).components(&module).unwrap();

        assert_eq!(names(&components), vec!["invoicing"]);
    }
}
