//! Command-line entry point: argument parsing, the run handler and its
//! terminal output.

pub mod command;
pub mod diagnostic;
pub mod output;
pub mod run;
