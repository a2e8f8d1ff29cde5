//! Command implementations behind the `ngraph` binary.

pub mod commands;
