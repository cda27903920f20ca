//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use satpad::config::ControlPolicy;
use std::path::PathBuf;

/// satpad: satoshi amount keypad
#[derive(Parser, Debug)]
#[command(name = "satpad")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, env = "SATPAD_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive keypad and print the amount entered
    Run(RunArgs),

    /// Replay key tokens headlessly and print the resulting amount
    Replay(ReplayArgs),

    /// Show the effective keypad configuration
    Config(ConfigArgs),
}

/// Options shared by every command that builds a keypad
#[derive(Args, Debug, Clone, Default)]
pub struct KeypadArgs {
    /// Keypad configuration file (YAML, or JSON by extension)
    #[arg(short, long, env = "SATPAD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the control policy from the configuration
    #[arg(long)]
    pub controls: Option<ControlsArg>,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Keypad options
    #[command(flatten)]
    pub keypad: KeypadArgs,
}

/// Arguments for the replay command
#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// Keypad options
    #[command(flatten)]
    pub keypad: KeypadArgs,

    /// Print the display after every token
    #[arg(long)]
    pub steps: bool,

    /// Key labels, `clear`/`c`, or `backspace`/`bs`/`<`
    #[arg(required = true)]
    pub tokens: Vec<String>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Keypad options
    #[command(flatten)]
    pub keypad: KeypadArgs,

    /// Output format
    #[arg(short, long, default_value = "yaml")]
    pub format: FormatArg,
}

/// Control policy argument
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlsArg {
    /// Bind keypad keys only
    Disabled,
    /// Bind each control that is present
    Optional,
    /// Fail unless both controls are present
    Required,
}

impl From<ControlsArg> for ControlPolicy {
    fn from(arg: ControlsArg) -> Self {
        match arg {
            ControlsArg::Disabled => Self::Disabled,
            ControlsArg::Optional => Self::Optional,
            ControlsArg::Required => Self::Required,
        }
    }
}

/// Configuration output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// YAML
    #[default]
    Yaml,
    /// Pretty-printed JSON
    Json,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
