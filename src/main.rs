//! CLI entry point for arbor

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use arbor::{
    BuilderConfig, HostFs, RenderConfig, RenderStyle, Renderer, SortOrder, TreeBuilder,
    print_json, resolve_root,
};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Depth used when -L is not given.
const DEFAULT_LEVEL: i64 = 3;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Sibling ordering
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum SortMode {
    /// Filesystem iteration order
    #[default]
    None,
    /// By name
    Name,
    /// Directories first, then by name
    DirsFirst,
}

impl From<SortMode> for SortOrder {
    fn from(mode: SortMode) -> Self {
        match mode {
            SortMode::None => SortOrder::Discovery,
            SortMode::Name => SortOrder::Name,
            SortMode::DirsFirst => SortOrder::DirsFirst,
        }
    }
}

/// Line layout
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum StyleMode {
    /// Indented lines with +-- and |-- markers
    #[default]
    Indent,
    /// tree(1)-style connectors
    Guides,
}

impl From<StyleMode> for RenderStyle {
    fn from(mode: StyleMode) -> Self {
        match mode {
            StyleMode::Indent => RenderStyle::Indent,
            StyleMode::Guides => RenderStyle::Guides,
        }
    }
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(about = "Print a directory tree down to a fixed depth")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend only N levels deep (0 = root only)
    #[arg(
        short = 'L',
        long = "level",
        default_value_t = DEFAULT_LEVEL,
        allow_negative_numbers = true
    )]
    level: i64,

    /// Sibling order: none, name, dirs-first
    #[arg(long = "sort", value_name = "ORDER", default_value = "none")]
    sort: SortMode,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Line layout: indent, guides
    #[arg(long = "style", default_value = "indent")]
    style: StyleMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Print "N directories, M files" after the tree
    #[arg(long = "summary", conflicts_with = "json")]
    summary: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log skipped entries (-v) or every listing (-vv) to stderr
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Install the stderr log subscriber. `ARBOR_LOG` takes precedence over -v.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("ARBOR_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("arbor={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let root = resolve_root(&args.path, &cwd);
    debug!(root = %root.display(), level = args.level, "building tree");

    let builder = TreeBuilder::new(HostFs).with_config(BuilderConfig {
        sort: args.sort.into(),
        ignore_patterns: args.ignore.clone(),
    });

    let tree = match builder.build(&root, args.level) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("arbor: {}", e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&tree)
    } else {
        let renderer = Renderer::new(RenderConfig {
            style: args.style.into(),
            summary: args.summary,
        });
        renderer.print(&tree, should_use_color(args.color))
    };

    if let Err(e) = result {
        eprintln!("arbor: error writing output: {}", e);
        process::exit(1);
    }
}
