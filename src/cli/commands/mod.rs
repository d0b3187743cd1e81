//! Subcommand handlers

pub mod export;
pub mod import;
pub mod list;
pub mod purge;
pub mod template;
