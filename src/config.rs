//! Layout configuration.
//!
//! Describes the directory conventions of the documented source tree and a few
//! rendering options. Every field has a default, so an empty TOML file (or no
//! file at all) gives the standard `module/components/component` layout.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::docs::DocExtractor;
use crate::error::{AutodocError, Result};

/// Description used when a module or component has no `desc.txt`.
pub const DEFAULT_DESCRIPTION: &str = "No description available.";

/// Matches `def name(...):` followed by an indented triple-quoted block.
pub const DEFAULT_DOC_PATTERN: &str = r#"(?s)def (\w+)\(.*?\):\n\s+"""(.*?)""""#;

/// How diagram references are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageStyle {
    /// Plain markdown image: `![alt](path)`
    #[default]
    Markdown,
    /// Centered HTML block, for renderers that honor inline HTML
    Centered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Subdirectory of a module that holds its components
    pub components_dir: String,
    /// Subdirectory of a module/component holding description and diagram
    pub docs_dir: String,
    pub description_file: String,
    /// File stem of the diagram image, without extension
    pub diagram_stem: String,
    /// Diagram extensions, in priority order
    pub diagram_extensions: Vec<String>,
    /// Path substring marking the "Use Cases" category
    pub use_cases_marker: String,
    /// Path substring marking the "Services" category
    pub services_marker: String,
    /// Extensions of files scanned for documentation comments
    pub source_extensions: Vec<String>,
    pub output_file: String,
    pub images_dir: String,
    pub default_description: String,
    /// File name (inside `images_dir`) referenced when no diagram exists
    pub default_diagram: String,
    pub image_style: ImageStyle,
    /// Level 1 heading of the generated document
    pub title: String,
    /// Regex with two capture groups: function name, documentation body
    pub doc_pattern: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            components_dir: "components".to_string(),
            docs_dir: "docs".to_string(),
            description_file: "desc.txt".to_string(),
            diagram_stem: "diagram".to_string(),
            diagram_extensions: ["jpg", "jpeg", "png", "svg"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            use_cases_marker: "useCases".to_string(),
            services_marker: "services".to_string(),
            source_extensions: vec!["py".to_string()],
            output_file: "modules.md".to_string(),
            images_dir: "images".to_string(),
            default_description: DEFAULT_DESCRIPTION.to_string(),
            default_diagram: "default_diagram.png".to_string(),
            image_style: ImageStyle::Markdown,
            title: "Modules".to_string(),
            doc_pattern: DEFAULT_DOC_PATTERN.to_string(),
        }
    }
}

impl LayoutConfig {
    /// Load a config from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AutodocError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded layout config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LayoutConfig = toml::from_str(content)
            .map_err(|e| AutodocError::Config(format!("Failed to parse layout config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_layout()?;
        self.doc_extractor().map(|_| ())
    }

    /// Checks everything except the doc pattern
    pub fn validate_layout(&self) -> Result<()> {
        let required = [
            ("components_dir", &self.components_dir),
            ("docs_dir", &self.docs_dir),
            ("description_file", &self.description_file),
            ("diagram_stem", &self.diagram_stem),
            ("use_cases_marker", &self.use_cases_marker),
            ("services_marker", &self.services_marker),
            ("output_file", &self.output_file),
            ("images_dir", &self.images_dir),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AutodocError::Config(format!("{} cannot be empty", field)));
            }
        }

        if self.diagram_extensions.is_empty() {
            return Err(AutodocError::Config(
                "diagram_extensions must list at least one extension".to_string(),
            ));
        }

        Ok(())
    }

    /// Compile `doc_pattern` into an extractor. The default pattern reuses the
    /// cached regex.
    pub fn doc_extractor(&self) -> Result<DocExtractor> {
        let extractor = DocExtractor::new(&self.doc_pattern)?;
        if extractor.group_count() < 2 {
            return Err(AutodocError::Config(format!(
                "doc_pattern needs two capture groups (name, body), found {}",
                extractor.group_count()
            )));
        }
        Ok(extractor)
    }

    /// Relative path of the fallback diagram, as written into the markdown
    pub fn default_diagram_ref(&self) -> String {
        format!("{}/{}", self.images_dir, self.default_diagram)
    }

    pub fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.source_extensions.iter().any(|e| e == ext))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_layout_convention() {
        let config = LayoutConfig::default();
        assert_eq!(config.components_dir, "components");
        assert_eq!(config.docs_dir, "docs");
        assert_eq!(config.diagram_extensions, vec!["jpg", "jpeg", "png", "svg"]);
        assert_eq!(config.default_description, "No description available.");
        assert_eq!(config.default_diagram_ref(), "images/default_diagram.png");
        assert_eq!(config.output_file, "modules.md");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = LayoutConfig::from_toml_str("").unwrap();
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = LayoutConfig::from_toml_str(
            r#"
components_dir = "parts"
image_style = "centered"
source_extensions = ["py", "pyi"]
"#,
        )
        .unwrap();

        assert_eq!(config.components_dir, "parts");
        assert_eq!(config.image_style, ImageStyle::Centered);
        assert_eq!(config.source_extensions, vec!["py", "pyi"]);
        assert_eq!(config.docs_dir, "docs");
    }

    #[test]
    fn test_rejects_empty_directory_name() {
        let err = LayoutConfig::from_toml_str(r#"docs_dir = """#).unwrap_err();
        assert!(matches!(err, AutodocError::Config(_)));
    }

    #[test]
    fn test_rejects_empty_diagram_extensions() {
        let err = LayoutConfig::from_toml_str("diagram_extensions = []").unwrap_err();
        assert!(matches!(err, AutodocError::Config(_)));
    }

    #[test]
    fn test_rejects_pattern_without_groups() {
        let err = LayoutConfig::from_toml_str(r#"doc_pattern = "def \\w+""#).unwrap_err();
        assert!(matches!(err, AutodocError::Config(_)));
    }

    #[test]
    fn test_rejects_invalid_pattern() {
        let err = LayoutConfig::from_toml_str(r#"doc_pattern = "def (\\w+""#).unwrap_err();
        assert!(matches!(err, AutodocError::Pattern(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = LayoutConfig::from_toml_str("components_dir = ").unwrap_err();
        assert!(matches!(err, AutodocError::Config(_)));
    }

    #[test]
    fn test_is_source_file() {
        let config = LayoutConfig::default();
        assert!(config.is_source_file(Path::new("useCases/create.py")));
        assert!(!config.is_source_file(Path::new("README.md")));
        assert!(!config.is_source_file(Path::new("Makefile")));
    }
}
