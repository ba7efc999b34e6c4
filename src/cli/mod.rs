pub mod commands;
pub mod core;
pub mod framing;
pub mod help;
pub mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod view;

pub use self::core::{CliError, CliMode, CommandError, ShellContext};
pub use shell::run_cli;
