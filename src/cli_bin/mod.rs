//! Command-line layer: argument parsing and the single command handler

pub mod args;
pub mod commands;
