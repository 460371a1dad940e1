//! Tree renderer
//!
//! Turns a built [`Node`] tree into display lines in pre-order. Rendering
//! only reads the tree, so the same tree always yields the same lines.

use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::Node;

use super::config::{RenderConfig, RenderStyle};

const INDENT_UNIT: &str = "   ";
const DIR_MARKER: &str = "+-- ";
const FILE_MARKER: &str = "|-- ";

/// One laid-out line: everything before the name, then the name itself.
struct Line<'a> {
    prefix: String,
    name: &'a str,
    is_dir: bool,
}

/// Render `root` with the default indent style and no summary.
pub fn render(root: &Node) -> Vec<String> {
    Renderer::default().lines(root)
}

/// Formatter for buffered tree output.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Plain display lines, one per node, in pre-order.
    pub fn lines(&self, root: &Node) -> Vec<String> {
        let mut lines: Vec<String> = self
            .layout(root)
            .into_iter()
            .map(|line| format!("{}{}", line.prefix, line.name))
            .collect();

        if self.config.summary {
            lines.push(String::new());
            lines.push(summary_line(root));
        }
        lines
    }

    /// Write the tree to stdout, coloring directory names when `use_color`.
    pub fn print(&self, root: &Node, use_color: bool) -> io::Result<()> {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_to(root, &mut stdout)
    }

    /// Write the tree to any color-capable sink.
    pub fn write_to<W: WriteColor>(&self, root: &Node, out: &mut W) -> io::Result<()> {
        for line in self.layout(root) {
            write!(out, "{}", line.prefix)?;
            if line.is_dir {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(out, "{}", line.name)?;
                out.reset()?;
            } else {
                write!(out, "{}", line.name)?;
            }
            writeln!(out)?;
        }

        if self.config.summary {
            writeln!(out)?;
            writeln!(out, "{}", summary_line(root))?;
        }
        Ok(())
    }

    fn layout<'a>(&self, root: &'a Node) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        match self.config.style {
            RenderStyle::Indent => layout_indent(root, 0, &mut lines),
            RenderStyle::Guides => {
                lines.push(Line {
                    prefix: String::new(),
                    name: root.name(),
                    is_dir: root.is_dir(),
                });
                layout_guides(root.children(), "", &mut lines);
            }
        }
        lines
    }
}

fn layout_indent<'a>(node: &'a Node, depth: usize, lines: &mut Vec<Line<'a>>) {
    let marker = if node.is_dir() { DIR_MARKER } else { FILE_MARKER };
    lines.push(Line {
        prefix: format!("{}{}", INDENT_UNIT.repeat(depth), marker),
        name: node.name(),
        is_dir: node.is_dir(),
    });

    for child in node.children() {
        layout_indent(child, depth + 1, lines);
    }
}

fn layout_guides<'a>(children: &'a [Node], prefix: &str, lines: &mut Vec<Line<'a>>) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(Line {
            prefix: format!("{}{}", prefix, connector),
            name: child.name(),
            is_dir: child.is_dir(),
        });

        let child_prefix = if is_last {
            format!("{}    ", prefix)
        } else {
            format!("{}│   ", prefix)
        };
        layout_guides(child.children(), &child_prefix, lines);
    }
}

fn summary_line(root: &Node) -> String {
    let (dirs, files) = root.count();
    format!("{} directories, {} files", dirs, files)
}
