use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthChar;

/// Actions triggered by search bar input
pub enum SearchAction {
    None,
    Exit,
    Update,
}

/// What a committed search line means for the controller: bare words form
/// the free-text query, `field=value` tokens become per-field filters. A
/// `field=` token with no value clears that field's filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSearch {
    pub query: String,
    pub filters: Vec<(String, String)>,
}

#[derive(Default)]
pub struct Filter {
    in_search: bool,
    input: Vec<char>,
    cursor: usize,
}

impl Filter {
    pub fn activate(&mut self) {
        self.in_search = true;
    }
    pub fn deactivate(&mut self) {
        self.in_search = false;
    }
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }
    pub fn term(&self) -> String {
        self.input.iter().collect()
    }
    pub fn active(&self) -> bool {
        self.in_search
    }

    /// Split the current line into free-text words and `field=value`
    /// filter tokens.
    pub fn parsed(&self) -> ParsedSearch {
        parse_search(&self.term())
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let hint = if self.in_search || !self.input.is_empty() {
            self.term()
        } else {
            "Press / to search (e.g. status=unpaid mitra)".into()
        };
        let p = Paragraph::new(hint).block(
            Block::bordered()
                .title(" Search ")
                .border_type(ratatui::widgets::BorderType::Rounded),
        );
        frame.render_widget(p, area);

        if self.in_search {
            let w: u16 = self
                .input
                .iter()
                .take(self.cursor)
                .map(|c| c.width().unwrap_or(1) as u16)
                .sum();
            frame.set_cursor_position(Position::new(area.x + 1 + w, area.y + 1));
        }
    }

    pub fn handle_key(&mut self, key: &ratatui::crossterm::event::KeyEvent) -> SearchAction {
        use ratatui::crossterm::event::{KeyCode, KeyModifiers};
        match key.code {
            KeyCode::Esc | KeyCode::Enter => return SearchAction::Exit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                return SearchAction::Exit;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.input.remove(self.cursor);
                }
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor < self.input.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Char(ch) => {
                self.input.insert(self.cursor, ch);
                self.cursor += 1;
            }
            _ => return SearchAction::None,
        }
        SearchAction::Update
    }
}

fn parse_search(line: &str) -> ParsedSearch {
    let mut words = Vec::new();
    let mut filters = Vec::new();

    for part in line.split_whitespace() {
        if let Some((key, value)) = part.split_once('=') {
            if key.is_empty() {
                words.push(part.to_string());
                continue;
            }
            let value = value.trim_matches('"').trim_matches('\'');
            filters.push((key.to_string(), value.to_string()));
        } else {
            words.push(part.to_string());
        }
    }

    ParsedSearch {
        query: words.join(" "),
        filters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_words_become_the_query() {
        let p = parse_search("mitra sejati");
        assert_eq!(p.query, "mitra sejati");
        assert!(p.filters.is_empty());
    }

    #[test]
    fn key_value_tokens_become_filters() {
        let p = parse_search("status=unpaid department=Finance");
        assert_eq!(p.query, "");
        assert_eq!(
            p.filters,
            vec![
                ("status".into(), "unpaid".into()),
                ("department".into(), "Finance".into())
            ]
        );
    }

    #[test]
    fn mixed_line_splits_into_both() {
        let p = parse_search("mitra status='unpaid'");
        assert_eq!(p.query, "mitra");
        assert_eq!(p.filters, vec![("status".into(), "unpaid".into())]);
    }

    #[test]
    fn empty_value_token_is_kept_as_a_clear_request() {
        let p = parse_search("status=");
        assert_eq!(p.filters, vec![("status".into(), String::new())]);
    }
}
