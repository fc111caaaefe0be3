pub mod tree;
pub mod walker;

pub use tree::{child_dirs, NodeDir, TreeScanner};
pub use walker::FileWalker;
