use crate::{float::FloatContent, hint::Shortcut, theme::Theme};
use ratatui::{Frame, layout::Rect};

/// Floating yes/no dialog, used for quit and delete confirmation.
/// Press [y] to confirm, [n] or [Esc] to cancel.
pub struct ConfirmDialog {
    title: String,
    message: String,
    finished: bool,
    confirmed: bool,
}

impl ConfirmDialog {
    pub fn quit() -> Self {
        Self::new(" Exit Confirmation ", "Are you sure you want to exit?")
    }

    pub fn delete(label: &str) -> Self {
        Self::new(
            " Delete Confirmation ",
            &format!("Delete record {label}?\nThis cannot be undone."),
        )
    }

    fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            finished: false,
            confirmed: false,
        }
    }

    pub fn confirmed(&self) -> bool {
        self.confirmed
    }
}

impl FloatContent for ConfirmDialog {
    fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        use ratatui::{
            layout::Alignment,
            style::{Modifier, Style},
            widgets::{Block, BorderType, Borders, Clear, Paragraph},
        };

        // Dimmed overlay to prevent background content from showing through
        let overlay = Block::default().style(Style::default().bg(theme.overlay_bg()));
        frame.render_widget(overlay, frame.area());

        // Clear popup area (erase buffer content)
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(self.title.clone())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border_color()));

        let text = Paragraph::new(format!(
            "{}\n\n[y] Yes              [n] No",
            self.message
        ))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.info_color())
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

        frame.render_widget(text, area);
    }

    fn handle_key_event(&mut self, key: &ratatui::crossterm::event::KeyEvent) -> bool {
        use ratatui::crossterm::event::KeyCode::*;
        match key.code {
            Char('y') => {
                self.confirmed = true;
                self.finished = true;
                true
            }
            Char('n') | Esc => {
                self.finished = true;
                false
            }
            _ => false,
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn get_shortcut_list(&self) -> (&str, Box<[Shortcut]>) {
        (
            "Confirmation",
            crate::shortcuts!(("Confirm", ["y"]), ("Cancel", ["n", "Esc"])),
        )
    }
}
