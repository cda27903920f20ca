//! satpad CLI library
//!
//! Command-line interface for the satoshi keypad: an interactive terminal
//! pad, a headless token replayer and a configuration printer.

#![warn(missing_docs)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod runner;

pub use commands::{
    Cli, ColorArg, Commands, ConfigArgs, ControlsArg, FormatArg, KeypadArgs, ReplayArgs, RunArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use runner::ReplayStep;

/// Builds the CLI configuration from parsed arguments
#[must_use]
pub fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into())
        .with_log_file(cli.log_file.clone())
}
