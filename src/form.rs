use crate::{float::FloatContent, hint::Shortcut, shortcuts, theme::Theme};
use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthChar;

/// Modal create/edit form over a schema's fields. It only collects
/// strings; field validation is not its job.
pub struct RecordForm {
    title: String,
    names: Vec<String>,
    inputs: Vec<Vec<char>>,
    selected: usize,
    cursor: usize,
    finished: bool,
    submitted: bool,
}

impl RecordForm {
    pub fn create(names: Vec<String>) -> Self {
        let inputs = vec![Vec::new(); names.len()];
        Self::with_inputs(" New Record ", names, inputs)
    }

    pub fn edit(names: Vec<String>, values: &[String]) -> Self {
        let inputs = values.iter().map(|v| v.chars().collect()).collect();
        Self::with_inputs(" Edit Record ", names, inputs)
    }

    fn with_inputs(title: &str, names: Vec<String>, inputs: Vec<Vec<char>>) -> Self {
        let cursor = inputs.first().map(Vec::len).unwrap_or(0);
        Self {
            title: title.to_string(),
            names,
            inputs,
            selected: 0,
            cursor,
            finished: false,
            submitted: false,
        }
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Collected (field name, value) pairs for `create`/`update`.
    pub fn fields(&self) -> Vec<(String, String)> {
        self.names
            .iter()
            .zip(&self.inputs)
            .map(|(n, v)| (n.clone(), v.iter().collect()))
            .collect()
    }

    fn select(&mut self, idx: usize) {
        self.selected = idx;
        self.cursor = self.inputs[idx].len();
    }

    fn move_down(&mut self) {
        if self.selected + 1 < self.names.len() {
            self.select(self.selected + 1);
        }
    }

    fn move_up(&mut self) {
        if self.selected > 0 {
            self.select(self.selected - 1);
        }
    }

    fn label_width(&self) -> usize {
        self.names.iter().map(String::len).max().unwrap_or(0)
    }
}

impl FloatContent for RecordForm {
    fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let overlay = Block::default().style(Style::default().bg(theme.overlay_bg()));
        frame.render_widget(overlay, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(self.title.clone())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border_color()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let label_width = self.label_width();
        let lines: Vec<Line> = self
            .names
            .iter()
            .zip(&self.inputs)
            .enumerate()
            .map(|(i, (name, value))| {
                let text = format!(
                    "{name:>label_width$}: {}",
                    value.iter().collect::<String>()
                );
                if i == self.selected {
                    Line::from(text).style(
                        Style::default()
                            .fg(theme.selection_fg())
                            .bg(theme.selection_bg())
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::from(text)
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);

        // Cursor inside the selected field's value.
        let prefix = label_width as u16 + 2;
        let w: u16 = self.inputs[self.selected]
            .iter()
            .take(self.cursor)
            .map(|c| c.width().unwrap_or(1) as u16)
            .sum();
        frame.set_cursor_position(Position::new(
            inner.x + prefix + w,
            inner.y + self.selected as u16,
        ));
    }

    fn handle_key_event(&mut self, key: &KeyEvent) -> bool {
        use KeyCode::*;
        match key.code {
            Esc => {
                self.finished = true;
                self.submitted = false;
            }
            Enter => {
                self.finished = true;
                self.submitted = true;
            }
            Down | Tab => self.move_down(),
            Up | BackTab => self.move_up(),
            Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.inputs[self.selected].remove(self.cursor);
                }
            }
            Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            Right => {
                if self.cursor < self.inputs[self.selected].len() {
                    self.cursor += 1;
                }
            }
            Char(ch) => {
                self.inputs[self.selected].insert(self.cursor, ch);
                self.cursor += 1;
            }
            _ => {}
        }
        self.finished
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn get_shortcut_list(&self) -> (&str, Box<[Shortcut]>) {
        (
            "Record Form",
            shortcuts!(
                ("Next field", ["Tab", "↓"]),
                ("Previous field", ["Shift+Tab", "↑"]),
                ("Save", ["Enter"]),
                ("Cancel", ["Esc"]),
            ),
        )
    }
}
