//! Documentation gathering and rendering
//!
//! Resolves per-directory descriptions and diagrams, extracts documentation
//! comments from source files, and renders the collected model as markdown.

pub mod extractor;
pub mod markdown;
pub mod resolver;

pub use extractor::DocExtractor;
pub use markdown::{capitalize, section_title, MarkdownRenderer};
pub use resolver::DocsResolver;
