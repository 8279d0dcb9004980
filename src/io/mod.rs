//! Input/output operations, configuration and error handling

/// Command-line parsing and batch processing
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG export of generated matrices
pub mod image;
/// JSON inventory documents
pub mod inventory_file;
/// Logger initialization
pub mod logging;
/// Progress display for batch runs
pub mod progress;
/// JSON reports of generation outcomes
pub mod report;
