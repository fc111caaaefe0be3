//! Markdown rendering of the documentation model.
//!
//! Every fragment ends in a newline and fragments are joined with another
//! newline, which leaves a blank line between consecutive blocks.

use std::path::{Component as PathComponent, Path};

use crate::config::{ImageStyle, LayoutConfig};
use crate::model::{Category, Component, DocEntry, Diagram, Module, SourceDoc};

const SECTION_DELIMITER: &str = " > ";

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Display title of a source file: relative path without extension, with
/// separators replaced by ` > `, capitalized.
pub fn section_title(relative_path: &Path) -> String {
    let stem = relative_path.with_extension("");
    let parts: Vec<String> = stem
        .components()
        .filter_map(|c| match c {
            PathComponent::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    capitalize(&parts.join(SECTION_DELIMITER))
}

pub fn heading(level: usize, text: &str) -> String {
    format!("{} {}\n", "#".repeat(level), text)
}

pub fn image_block(style: ImageStyle, alt: &str, path: &str) -> String {
    match style {
        ImageStyle::Markdown => format!("![{}]({})\n", alt, path),
        ImageStyle::Centered => format!(
            "<div align=\"center\"><img src=\"{}\" alt=\"{}\"></div>\n",
            path, alt
        ),
    }
}

pub fn entry_block(entry: &DocEntry) -> String {
    format!(
        "{}```\n{}\n```\n",
        heading(5, &capitalize(&entry.name)),
        entry.body
    )
}

/// Renders modules into the final document
pub struct MarkdownRenderer<'a> {
    config: &'a LayoutConfig,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, modules: &[Module]) -> String {
        let mut fragments = vec![heading(1, &self.config.title)];

        for module in modules {
            fragments.push(heading(2, &capitalize(&module.name)));
            fragments.push(format!("{}\n", module.docs.description));
            fragments.push(self.diagram_block(
                &module.name,
                &module.docs.diagram,
                "Module Diagram",
                "Module Diagram",
            ));

            for component in &module.components {
                fragments.push(self.render_component(component));
            }
        }

        fragments.join("\n")
    }

    pub fn render_component(&self, component: &Component) -> String {
        let mut fragments = vec![
            heading(3, &capitalize(&component.name)),
            format!("{}\n", component.docs.description),
            self.diagram_block(
                &component.name,
                &component.docs.diagram,
                "Module Diagram",
                "Diagram",
            ),
        ];

        for category in [Category::UseCases, Category::Services] {
            let mut sources = component.sources_in(category).peekable();
            if sources.peek().is_none() {
                continue;
            }

            fragments.push(heading(4, category.heading()));
            for source in sources {
                fragments.extend(self.source_fragments(source));
            }
        }

        fragments.join("\n")
    }

    fn source_fragments(&self, source: &SourceDoc) -> Vec<String> {
        let mut fragments = Vec::with_capacity(source.entries.len() + 1);
        fragments.push(heading(4, &source.section_title));
        fragments.extend(source.entries.iter().map(entry_block));
        fragments
    }

    fn diagram_block(&self, owner: &str, diagram: &Diagram, alt: &str, default_alt: &str) -> String {
        match diagram.output_name(owner) {
            Some(name) => image_block(
                self.config.image_style,
                alt,
                &format!("{}/{}", self.config.images_dir, name),
            ),
            None => image_block(
                self.config.image_style,
                default_alt,
                &self.config.default_diagram_ref(),
            ),
        }
    }
}
