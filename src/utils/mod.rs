//! Shared helpers: logging setup, project root search, terminal output

pub mod logging;
pub mod paths;
pub mod terminal;
