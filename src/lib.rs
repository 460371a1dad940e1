//! Arbor - depth-bounded directory trees, built once and rendered as text

pub mod error;
pub mod fs;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Skip, TraversalError};
pub use fs::{Entry, FileSystem, HostFs};
pub use output::{RenderConfig, RenderStyle, Renderer, print_json, render, to_json};
pub use tree::{BuilderConfig, CancelToken, Node, SortOrder, TreeBuilder, build, resolve_root};
