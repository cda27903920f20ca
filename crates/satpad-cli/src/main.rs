//! satpad CLI
//!
//! ## Usage
//!
//! ```bash
//! satpad run                          # Interactive keypad, prints the amount
//! satpad replay 2 1 000 backspace     # Headless, prints "2100"
//! satpad config --format json         # Effective configuration
//! ```

use clap::Parser;
use satpad_cli::{build_config, logging, runner, Cli, CliConfig, CliResult, Commands};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    match cli.command {
        Commands::Run(args) => {
            logging::init(&config, true)?;
            let keypad = runner::load_config(&args.keypad)?;
            let amount = runner::run_interactive(&keypad)?;
            println!("{amount}");
            Ok(())
        }
        Commands::Replay(args) => {
            logging::init(&config, false)?;
            let keypad = runner::load_config(&args.keypad)?;
            let steps = runner::replay(&keypad, &args.tokens)?;
            if args.steps {
                print_steps(&config, &steps);
            }
            println!("{}", runner::final_content(&steps));
            Ok(())
        }
        Commands::Config(args) => {
            logging::init(&config, false)?;
            let keypad = runner::load_config(&args.keypad)?;
            let rendered = runner::render_config(&keypad, args.format)?;
            println!("{}", rendered.trim_end());
            Ok(())
        }
    }
}

fn print_steps(config: &CliConfig, steps: &[runner::ReplayStep]) {
    let color = config.color.should_color();
    for step in steps {
        eprintln!("{}", runner::format_step(step, color));
    }
}
