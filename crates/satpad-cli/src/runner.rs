//! Command execution

use std::io;

use console::style;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use satpad::config::KeypadConfig;
use satpad::tui::{hit_test, keypad_area, render, InputHandler, KeypadApp};

use crate::commands::{FormatArg, KeypadArgs};
use crate::error::{CliError, CliResult};

/// Loads the keypad configuration and applies command-line overrides
pub fn load_config(args: &KeypadArgs) -> CliResult<KeypadConfig> {
    let mut config = match &args.config {
        Some(path) => KeypadConfig::load(path)?,
        None => KeypadConfig::default(),
    };
    if let Some(controls) = args.controls {
        config = config.with_controls(controls.into());
    }
    config.build_layout()?;
    Ok(config)
}

/// One replayed token and the display after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayStep {
    /// Token as given
    pub token: String,
    /// Whether the action ran (false for unwired controls)
    pub applied: bool,
    /// Display content afterwards
    pub content: String,
}

/// Replays tokens against a fresh keypad
///
/// Every token is parsed before any is applied, so an unknown token fails
/// the whole replay.
pub fn replay(config: &KeypadConfig, tokens: &[String]) -> CliResult<Vec<ReplayStep>> {
    let mut app = KeypadApp::from_config(config)?;
    let actions = tokens
        .iter()
        .map(|token| app.layout().parse_token(token))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(tokens = tokens.len(), "replaying");
    Ok(tokens
        .iter()
        .zip(actions)
        .map(|(token, action)| {
            let applied = app.apply(&action);
            ReplayStep {
                token: token.clone(),
                applied,
                content: app.content().to_string(),
            }
        })
        .collect())
}

/// Final display content of a replay
#[must_use]
pub fn final_content(steps: &[ReplayStep]) -> &str {
    steps.last().map_or("", |step| step.content.as_str())
}

/// Formats a replay step for `--steps`
#[must_use]
pub fn format_step(step: &ReplayStep, color: bool) -> String {
    let token = style(format!("{:>9}", step.token)).force_styling(color);
    let token = if step.applied {
        token.cyan()
    } else {
        token.dim()
    };
    let content = if step.content.is_empty() {
        style("(empty)".to_string()).force_styling(color).dim()
    } else {
        style(step.content.clone()).force_styling(color).green()
    };
    format!("{token} -> {content}")
}

/// Renders the configuration in the requested format
pub fn render_config(config: &KeypadConfig, format: FormatArg) -> CliResult<String> {
    let rendered = match format {
        FormatArg::Yaml => config.to_yaml()?,
        FormatArg::Json => config.to_json()?,
    };
    Ok(rendered)
}

/// Runs the interactive keypad and returns the amount entered
pub fn run_interactive(config: &KeypadConfig) -> CliResult<String> {
    let mut app = KeypadApp::from_config(config)?;

    enable_raw_mode().map_err(|e| CliError::terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode().map_err(|e| CliError::terminal(e.to_string()))?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    tracing::info!(content = app.content(), "keypad closed");
    Ok(app.content().to_string())
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut KeypadApp) -> CliResult<()> {
    let input = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|f| render(app, f))?;

        match event::read()? {
            Event::Key(key) => {
                app.handle_key(input.handle_key(key));
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = keypad_area(Rect::new(0, 0, size.width, size.height));
                if let Some(hit) =
                    hit_test(app.layout(), app.controls(), area, mouse.column, mouse.row)
                {
                    app.click(hit);
                }
            }
            _ => {}
        }
    }
    Ok(())
}
