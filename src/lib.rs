pub mod config;
pub mod docs;
pub mod error;
pub mod generator;
pub mod model;
pub mod scanner;

pub use config::{ImageStyle, LayoutConfig, DEFAULT_DESCRIPTION};
pub use docs::{DocExtractor, DocsResolver, MarkdownRenderer};
pub use error::{AutodocError, Result};
pub use generator::{GenerationReport, Generator};
pub use model::{Category, Component, DocEntry, Diagram, Module, NodeDocs, SourceDoc};
pub use scanner::{FileWalker, TreeScanner};
