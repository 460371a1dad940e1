//! Directory tree building
//!
//! `TreeBuilder` walks a root path once, depth-first, and returns an
//! immutable [`Node`] tree bounded by a maximum depth. Unreadable
//! descendants are skipped; only input validation and root failures
//! are reported.

mod builder;
mod cancel;
mod config;
mod node;
mod utils;

pub use builder::{TreeBuilder, build};
pub use cancel::CancelToken;
pub use config::{BuilderConfig, SortOrder};
pub use node::Node;
pub use utils::resolve_root;
