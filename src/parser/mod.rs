// ============================================================================
// Parser Module
// Configured wrapper over the scanner
// ============================================================================

pub mod config;
mod number_parser;

pub use config::ParserConfig;
pub use number_parser::NumberParser;
