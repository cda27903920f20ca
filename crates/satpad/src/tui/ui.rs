//! Terminal rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::KeypadApp;
use super::keypad::KeypadWidget;

/// Title on the outer border
pub const TITLE: &str = " satpad ";

/// Placeholder shown while the display is empty
pub const EMPTY_DISPLAY: &str = "0";

/// One-line key help
pub const HELP_LINE: &str = "digits: type  Bksp: delete  Esc: clear  click: press  q: quit";

/// Renders the keypad UI to the frame
pub fn render(app: &KeypadApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(KeypadUi::new(app), area);
}

/// Splits the frame into display, keypad and help areas
fn sections(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Min(8),    // Keypad
            Constraint::Length(1), // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Area the keypad widget occupies inside a frame of the given size
///
/// Mouse events are hit-tested against this.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    sections(area)[1]
}

/// Keypad UI widget
#[derive(Debug)]
pub struct KeypadUi<'a> {
    app: &'a KeypadApp,
}

impl<'a> KeypadUi<'a> {
    /// Creates a new UI widget
    #[must_use]
    pub fn new(app: &'a KeypadApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let content = self.app.content();
        let span = if content.is_empty() {
            Span::styled(EMPTY_DISPLAY, Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                content,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        };

        Paragraph::new(Line::from(vec![span, Span::raw(" sats")]))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Amount ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HELP_LINE, Style::default().fg(Color::Gray)))
            .render(area, buf);
    }
}

impl Widget for KeypadUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let [display, keypad, help] = sections(area);
        self.render_display(display, buf);
        KeypadWidget::new(self.app.layout(), self.app.controls())
            .pressed(self.app.last_pressed())
            .render(keypad, buf);
        Self::render_help(help, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ControlSet, KeypadLayout};
    use crate::tui::keypad::{hit_test, Hit};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &KeypadApp, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_empty_app() {
        let app = KeypadApp::default();
        let content = draw(&app, 40, 24);
        assert!(content.contains("satpad"));
        assert!(content.contains("Amount"));
        assert!(content.contains("0 sats"));
        assert!(content.contains("Keypad"));
    }

    #[test]
    fn test_render_shows_content() {
        let mut app = KeypadApp::default();
        app.press_label("2");
        app.press_label("1");
        app.press_label("000");
        let content = draw(&app, 40, 24);
        assert!(content.contains("21000 sats"));
    }

    #[test]
    fn test_render_shows_all_keys_and_controls() {
        let app = KeypadApp::default();
        let content = draw(&app, 40, 24);
        for label in ["[1]", "[9]", "[00]", "[000]", "[C]", "[⌫]"] {
            assert!(content.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_render_keys_only() {
        let app = KeypadApp::new(KeypadLayout::satoshi(), ControlSet::none());
        let content = draw(&app, 40, 24);
        assert!(content.contains("[000]"));
        assert!(!content.contains("[C]"));
    }

    #[test]
    fn test_render_help_line() {
        let app = KeypadApp::default();
        let content = draw(&app, 80, 24);
        assert!(content.contains("q: quit"));
    }

    #[test]
    fn test_render_small_terminal() {
        let app = KeypadApp::default();
        // Must not panic
        let _ = draw(&app, 10, 5);
    }

    #[test]
    fn test_keypad_area_matches_render() {
        let area = Rect::new(0, 0, 40, 24);
        let keypad = keypad_area(area);
        assert_eq!(keypad.x, 1);
        assert_eq!(keypad.y, 4);
        assert_eq!(keypad.width, 38);

        let layout = KeypadLayout::satoshi();
        let hit = hit_test(&layout, ControlSet::all(), keypad, keypad.x + 1, keypad.y + 1);
        assert_eq!(hit, Some(Hit::Key(0)));
    }
}
