//! Subcommands of the progbridge CLI.

pub mod list;
pub mod translate;
