//! Tree walk and document assembly.
//!
//! A run has three phases: scan the source tree into [`Module`]s, render
//! them to markdown, then write. Diagram copies and the markdown file are only
//! written once the whole tree has been scanned and rendered, so a fault
//! anywhere in the tree leaves no `modules.md` behind.

use std::path::{Path, PathBuf};

use crate::config::LayoutConfig;
use crate::docs::{section_title, DocExtractor, DocsResolver, MarkdownRenderer};
use crate::error::{AutodocError, Result};
use crate::model::{Category, Component, Diagram, Module, SourceDoc};
use crate::scanner::{FileWalker, NodeDir, TreeScanner};

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub modules: usize,
    pub components: usize,
    pub entries: usize,
    pub diagrams_copied: usize,
}

pub struct Generator {
    config: LayoutConfig,
    extractor: DocExtractor,
}

impl Generator {
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate_layout()?;
        let extractor = config.doc_extractor()?;
        Ok(Self { config, extractor })
    }

    /// Scan, render and write documentation for `src_root` into `doc_folder`.
    pub fn generate(&self, src_root: &Path, doc_folder: &Path) -> Result<GenerationReport> {
        let modules = self.scan(src_root)?;
        let markdown = self.render(&modules);

        let diagrams_copied = self.copy_diagrams(&modules, doc_folder)?;

        let output_path = doc_folder.join(&self.config.output_file);
        std::fs::write(&output_path, markdown)?;

        let components: usize = modules.iter().map(|m| m.components.len()).sum();
        let entries: usize = modules
            .iter()
            .flat_map(|m| &m.components)
            .map(Component::entry_count)
            .sum();

        tracing::info!(
            "Documented {} modules, {} components, {} entries",
            modules.len(),
            components,
            entries
        );

        Ok(GenerationReport {
            output_path,
            modules: modules.len(),
            components,
            entries,
            diagrams_copied,
        })
    }

    pub fn render(&self, modules: &[Module]) -> String {
        MarkdownRenderer::new(&self.config).render(modules)
    }

    /// Build the documentation model of the tree without writing anything.
    pub fn scan(&self, src_root: &Path) -> Result<Vec<Module>> {
        let scanner = TreeScanner::new(&self.config);
        let resolver = DocsResolver::new(&self.config);

        let mut modules = Vec::new();
        for dir in scanner.modules(src_root)? {
            tracing::info!("Scanning module {}", dir.name);
            let docs = resolver.resolve(&dir.path)?;

            let component_dirs = scanner.components(&dir.path)?;
            if component_dirs.is_empty() {
                tracing::warn!("Module {} has no components", dir.name);
            }

            let components = component_dirs
                .iter()
                .map(|component| self.scan_component(component, &resolver))
                .collect::<Result<Vec<_>>>()?;

            modules.push(Module {
                name: dir.name,
                path: dir.path,
                docs,
                components,
            });
        }

        Ok(modules)
    }

    fn scan_component(&self, dir: &NodeDir, resolver: &DocsResolver<'_>) -> Result<Component> {
        let docs = resolver.resolve(&dir.path)?;
        let walker = FileWalker::new(&self.config);

        let mut sources = Vec::new();
        for file in walker.walk(&dir.path)? {
            let relative = file
                .strip_prefix(&dir.path)
                .unwrap_or(file.as_path())
                .to_path_buf();

            // Every candidate is read, so a broken file aborts the run even
            // when it belongs to no category.
            let content = std::fs::read_to_string(&file).map_err(|e| AutodocError::Read {
                path: file.clone(),
                source: e,
            })?;
            let entries = self.extractor.extract(&content);
            if entries.is_empty() {
                continue;
            }

            let Some(category) = self.categorize(&relative) else {
                tracing::debug!("Skipping {}: no documentation category", relative.display());
                continue;
            };

            tracing::debug!(
                "{}: {} entries from {}",
                dir.name,
                entries.len(),
                relative.display()
            );
            sources.push(SourceDoc {
                section_title: section_title(&relative),
                relative_path: relative,
                category,
                entries,
            });
        }

        Ok(Component {
            name: dir.name.clone(),
            path: dir.path.clone(),
            docs,
            sources,
        })
    }

    /// Category of a file, from the directory path containing it relative to
    /// its component. Use cases take precedence over services.
    pub fn categorize(&self, relative: &Path) -> Option<Category> {
        let parent = relative.parent()?.to_string_lossy();
        if parent.contains(&self.config.use_cases_marker) {
            Some(Category::UseCases)
        } else if parent.contains(&self.config.services_marker) {
            Some(Category::Services)
        } else {
            None
        }
    }

    /// Copy every found diagram to `<doc_folder>/<images_dir>/<owner>_<file>`.
    /// The images directory must already exist.
    pub fn copy_diagrams(&self, modules: &[Module], doc_folder: &Path) -> Result<usize> {
        let images_dir = doc_folder.join(&self.config.images_dir);
        let nodes = modules.iter().flat_map(|m| {
            std::iter::once((&m.name, &m.docs.diagram))
                .chain(m.components.iter().map(|c| (&c.name, &c.docs.diagram)))
        });

        let mut copied = 0;
        for (owner, diagram) in nodes {
            let (Diagram::Found { source, .. }, Some(name)) = (diagram, diagram.output_name(owner))
            else {
                continue;
            };

            let dest = images_dir.join(name);
            std::fs::copy(source, &dest).map_err(|e| AutodocError::ImageCopy {
                from: source.clone(),
                to: dest.clone(),
                source: e,
            })?;
            tracing::debug!("Copied {} to {}", source.display(), dest.display());
            copied += 1;
        }

        Ok(copied)
    }
}
