//! CLI subcommand implementations.

pub mod get;
