//! Configuration types for the tree builder

/// How siblings are ordered inside each directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep the order in which the filesystem returned the entries.
    #[default]
    Discovery,
    /// Sort by name, byte-wise.
    Name,
    /// Directories before files, each group sorted by name.
    DirsFirst,
}

/// Configuration for tree building behavior.
#[derive(Debug, Clone, Default)]
pub struct BuilderConfig {
    pub sort: SortOrder,
    /// Glob patterns matched against entry names; matches are left out
    /// without being classified.
    pub ignore_patterns: Vec<String>,
}
