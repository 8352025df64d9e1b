//! CLI subcommand implementations.

pub mod departments;
pub mod object;
pub mod objects;
pub mod search;
