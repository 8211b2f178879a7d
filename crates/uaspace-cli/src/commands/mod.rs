//! CLI command implementations

pub mod browse;
pub mod completions;
pub mod config;
pub mod dump;
pub mod read;
pub mod write;
