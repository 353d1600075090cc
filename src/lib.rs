mod config;
pub use config::*;

mod document;
pub use document::*;

mod error;
pub use error::*;

/// Utility functions to wrap paragraphs into lines and justify each line to
/// the configured column width
pub mod layout;

mod line;
pub use line::*;

mod paragraph;
pub use paragraph::*;

mod units;
pub use units::*;
