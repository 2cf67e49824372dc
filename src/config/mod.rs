//! Configuration module for spendlens
//!
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendlensPaths;
pub use settings::Settings;
