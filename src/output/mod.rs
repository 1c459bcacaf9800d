//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `tree` - Text tree formatter with box-drawing connectors
//! - `json` - One JSON object per inspected path

mod config;
mod json;
mod tree;

pub use config::OutputConfig;
pub use json::{ModuleReport, write_json_line};
pub use tree::{TreeFormatter, line_prefix};
