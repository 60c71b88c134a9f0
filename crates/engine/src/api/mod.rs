//! Entry points: argument parsing and terminal output.

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands, GenerateArgs};
