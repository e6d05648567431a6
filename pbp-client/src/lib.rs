//! PBP client library
//!
//! This library provides the core functionality for the pbptool CLI.

pub mod commands;
pub mod output;

// Re-export command handlers
pub use crate::commands::{
    analyze::handle as handle_analyze, pack::handle as handle_pack,
    unpack::handle as handle_unpack,
};

/// Output format options for the CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Plain text output
    Text,
    /// JSON output
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_debug() {
        assert_eq!(format!("{:?}", OutputFormat::Text), "Text");
        assert_eq!(format!("{:?}", OutputFormat::Json), "Json");
        assert_eq!(format!("{:?}", OutputFormat::JsonPretty), "JsonPretty");
    }
}
