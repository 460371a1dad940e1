//! Output configuration types

/// Line layout used when rendering a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// Three spaces per level, `+-- ` before directories and `|-- ` before
    /// files, including the root.
    #[default]
    Indent,
    /// `tree(1)` look: bare root, `├── `/`└── ` connectors and `│` guides.
    Guides,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    pub style: RenderStyle,
    /// Append a blank line and an "N directories, M files" footer.
    pub summary: bool,
}
