//! Subcommand implementations.

pub mod create;
pub mod inspect;
