//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod generate;
pub mod scan;
pub mod solve;
