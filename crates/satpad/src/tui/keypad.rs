//! Keypad widget for the terminal frontend
//!
//! Keys are laid out on the layout grid inside a bordered block. When any
//! control is wired an extra row holds the `C` and `⌫` buttons, left and
//! right half respectively.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{ControlSet, KeypadLayout};

/// Label rendered on the clear button
pub const CLEAR_LABEL: &str = "C";
/// Label rendered on the backspace button
pub const BACKSPACE_LABEL: &str = "⌫";

/// What a click on the keypad area landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Key at the given layout index
    Key(usize),
    /// The clear button
    Clear,
    /// The backspace button
    Backspace,
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Button geometry shared by rendering and hit-testing
#[derive(Debug, Clone, Copy)]
struct Geometry {
    inner: Rect,
    btn_width: u16,
    btn_height: u16,
    rows: usize,
    cols: usize,
    control_row: bool,
}

impl Geometry {
    fn new(area: Rect, layout: &KeypadLayout, controls: ControlSet) -> Option<Self> {
        let inner = Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = layout.dimensions();
        let control_row = controls.clear || controls.backspace;
        let total_rows = rows + usize::from(control_row);

        let btn_width = inner.width / to_u16(cols.max(1));
        let btn_height = inner.height / to_u16(total_rows.max(1));
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        Some(Self {
            inner,
            btn_width,
            btn_height,
            rows,
            cols,
            control_row,
        })
    }

    fn cell(&self, row: usize, col: usize) -> Rect {
        Rect {
            x: self.inner.x + to_u16(col) * self.btn_width,
            y: self.inner.y + to_u16(row) * self.btn_height,
            width: self.btn_width,
            height: self.btn_height,
        }
    }

    /// Left and right halves of the control row
    fn control_cells(&self) -> (Rect, Rect) {
        let y = self.inner.y + to_u16(self.rows) * self.btn_height;
        let half = self.inner.width / 2;
        (
            Rect {
                x: self.inner.x,
                y,
                width: half,
                height: self.btn_height,
            },
            Rect {
                x: self.inner.x + half,
                y,
                width: self.inner.width - half,
                height: self.btn_height,
            },
        )
    }
}

/// Converts a click position to what it landed on
#[must_use]
pub fn hit_test(
    layout: &KeypadLayout,
    controls: ControlSet,
    area: Rect,
    x: u16,
    y: u16,
) -> Option<Hit> {
    let geometry = Geometry::new(area, layout, controls)?;
    let inner = geometry.inner;
    if x < inner.x || y < inner.y || x >= inner.x + inner.width || y >= inner.y + inner.height {
        return None;
    }

    let row = usize::from((y - inner.y) / geometry.btn_height);
    if row < geometry.rows {
        let col = usize::from((x - inner.x) / geometry.btn_width);
        return (col < geometry.cols).then_some(Hit::Key(row * geometry.cols + col));
    }

    if row == geometry.rows && geometry.control_row {
        let (_, right) = geometry.control_cells();
        return if x < right.x {
            controls.clear.then_some(Hit::Clear)
        } else {
            controls.backspace.then_some(Hit::Backspace)
        };
    }

    None
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    layout: &'a KeypadLayout,
    controls: ControlSet,
    pressed: Option<Hit>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(layout: &'a KeypadLayout, controls: ControlSet) -> Self {
        Self {
            layout,
            controls,
            pressed: None,
        }
    }

    /// Highlights the button that was activated last
    #[must_use]
    pub fn pressed(mut self, pressed: Option<Hit>) -> Self {
        self.pressed = pressed;
        self
    }

    fn style_for(&self, hit: Hit) -> Style {
        if self.pressed == Some(hit) {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match hit {
            Hit::Key(_) => Style::default().fg(Color::White),
            Hit::Clear => Style::default().fg(Color::Red),
            Hit::Backspace => Style::default().fg(Color::Magenta),
        }
    }
}

fn render_button(buf: &mut Buffer, cell: Rect, label: &str, style: Style) {
    let text = format!("[{label}]");
    let width = to_u16(text.chars().count());
    if cell.width < width {
        return;
    }
    let x = cell.x + (cell.width - width) / 2;
    let y = cell.y + cell.height / 2;
    buf.set_span(x, y, &Span::styled(text, style), cell.width);
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let Some(geometry) = Geometry::new(area, self.layout, self.controls) else {
            return; // Too small to render
        };

        for (index, key) in self.layout.keys().iter().enumerate() {
            let cell = geometry.cell(key.row, key.col);
            render_button(buf, cell, &key.label, self.style_for(Hit::Key(index)));
        }

        let (left, right) = geometry.control_cells();
        if self.controls.clear {
            render_button(buf, left, CLEAR_LABEL, self.style_for(Hit::Clear));
        }
        if self.controls.backspace {
            render_button(buf, right, BACKSPACE_LABEL, self.style_for(Hit::Backspace));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        // 3 columns of 8, 5 rows of 2 inside a 1-cell border
        Rect::new(0, 0, 26, 12)
    }

    fn render_to_string(widget: KeypadWidget<'_>, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_hit_test_keys() {
        let layout = KeypadLayout::satoshi();
        let controls = ControlSet::all();
        assert_eq!(hit_test(&layout, controls, area(), 1, 1), Some(Hit::Key(0)));
        assert_eq!(hit_test(&layout, controls, area(), 9, 1), Some(Hit::Key(1)));
        assert_eq!(hit_test(&layout, controls, area(), 24, 3), Some(Hit::Key(5)));
        assert_eq!(
            hit_test(&layout, controls, area(), 12, 7),
            Some(Hit::Key(10))
        );
    }

    #[test]
    fn test_hit_test_controls() {
        let layout = KeypadLayout::satoshi();
        let controls = ControlSet::all();
        assert_eq!(hit_test(&layout, controls, area(), 2, 9), Some(Hit::Clear));
        assert_eq!(
            hit_test(&layout, controls, area(), 20, 10),
            Some(Hit::Backspace)
        );
    }

    #[test]
    fn test_hit_test_unwired_controls() {
        let layout = KeypadLayout::satoshi();
        let partial = ControlSet {
            clear: true,
            backspace: false,
        };
        assert_eq!(hit_test(&layout, partial, area(), 2, 9), Some(Hit::Clear));
        assert_eq!(hit_test(&layout, partial, area(), 20, 9), None);
    }

    #[test]
    fn test_hit_test_without_control_row() {
        let layout = KeypadLayout::satoshi();
        // 4 rows of 2 inside the border, nothing below
        let area = Rect::new(0, 0, 26, 10);
        assert_eq!(
            hit_test(&layout, ControlSet::none(), area, 12, 7),
            Some(Hit::Key(10))
        );
        assert_eq!(hit_test(&layout, ControlSet::none(), area, 17, 9), None);
    }

    #[test]
    fn test_hit_test_border_and_outside() {
        let layout = KeypadLayout::satoshi();
        let controls = ControlSet::all();
        assert_eq!(hit_test(&layout, controls, area(), 0, 0), None);
        assert_eq!(hit_test(&layout, controls, area(), 25, 5), None);
        assert_eq!(hit_test(&layout, controls, area(), 5, 11), None);
        assert_eq!(hit_test(&layout, controls, area(), 100, 100), None);
    }

    #[test]
    fn test_hit_test_offset_area() {
        let layout = KeypadLayout::satoshi();
        let area = Rect::new(10, 5, 26, 12);
        assert_eq!(
            hit_test(&layout, ControlSet::all(), area, 11, 6),
            Some(Hit::Key(0))
        );
        assert_eq!(hit_test(&layout, ControlSet::all(), area, 1, 1), None);
    }

    #[test]
    fn test_hit_test_too_small() {
        let layout = KeypadLayout::satoshi();
        let area = Rect::new(0, 0, 4, 4);
        assert_eq!(hit_test(&layout, ControlSet::all(), area, 1, 1), None);
    }

    #[test]
    fn test_render_shows_labels() {
        let layout = KeypadLayout::satoshi();
        let content = render_to_string(KeypadWidget::new(&layout, ControlSet::all()), area());
        assert!(content.contains("Keypad"));
        for label in ["[1]", "[5]", "[9]", "[00]", "[0]", "[000]", "[C]", "[⌫]"] {
            assert!(content.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_render_hides_unwired_controls() {
        let layout = KeypadLayout::satoshi();
        let content = render_to_string(KeypadWidget::new(&layout, ControlSet::none()), area());
        assert!(content.contains("[000]"));
        assert!(!content.contains("[C]"));
        assert!(!content.contains("[⌫]"));
    }

    #[test]
    fn test_render_highlights_pressed() {
        let layout = KeypadLayout::satoshi();
        let area = area();
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&layout, ControlSet::all())
            .pressed(Some(Hit::Key(0)))
            .render(area, &mut buf);
        // "[1]" is centered in the first 8-wide cell on row 2
        let cell = &buf[(4, 2)];
        assert_eq!(cell.symbol(), "1");
        assert_eq!(cell.bg, Color::Yellow);
    }

    #[test]
    fn test_render_too_small_draws_border_only() {
        let layout = KeypadLayout::satoshi();
        let area = Rect::new(0, 0, 4, 4);
        let content = render_to_string(KeypadWidget::new(&layout, ControlSet::all()), area);
        assert!(!content.contains('1'));
    }
}
