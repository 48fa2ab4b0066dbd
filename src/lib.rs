// Export modules for testing
pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod registry;
pub mod shell;
