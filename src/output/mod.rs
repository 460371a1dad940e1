//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `render` - Line rendering, plain or colored
//! - `json` - JSON output

mod config;
mod json;
mod render;

pub use config::{RenderConfig, RenderStyle};
pub use json::{print_json, to_json};
pub use render::{Renderer, render};
