use crate::{controller::SortDirection, float::FloatContent, hint::Shortcut, shortcuts, theme::Theme};
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem},
};

#[derive(Debug, Clone)]
pub struct SortMenu {
    pub columns: Vec<String>,
    pub selected_col: usize,
    pub selected_dir: SortDirection,
    pub cursor_panel: usize,
    pub col_cursor: usize,
    pub col_scroll: usize,
    last_visible_height: usize,
    pub dir_cursor: usize,
    pub finished: bool,
    pub cancelled: bool,
}

impl SortMenu {
    pub fn new(columns: Vec<String>, default_col: usize, default_dir: SortDirection) -> Self {
        Self {
            columns,
            selected_col: default_col,
            selected_dir: default_dir,
            cursor_panel: 0,
            col_cursor: default_col,
            col_scroll: 0,
            last_visible_height: 0,
            dir_cursor: if matches!(default_dir, SortDirection::Desc) {
                1
            } else {
                0
            },
            finished: false,
            cancelled: false,
        }
    }

    fn ensure_cursor_in_view(&mut self) {
        if self.last_visible_height == 0 {
            return;
        }
        let start = self.col_scroll;
        let end = self
            .col_scroll
            .saturating_add(self.last_visible_height.saturating_sub(1));
        if self.col_cursor < start {
            self.col_scroll = self.col_cursor;
        } else if self.col_cursor > end {
            self.col_scroll = self
                .col_cursor
                .saturating_sub(self.last_visible_height - 1);
        }
    }

    fn move_down(&mut self) {
        match self.cursor_panel {
            0 => {
                if self.col_cursor + 1 < self.columns.len() {
                    self.col_cursor += 1;
                    self.ensure_cursor_in_view();
                }
            }
            1 => {
                if self.dir_cursor == 0 {
                    self.dir_cursor = 1;
                }
            }
            _ => {}
        }
    }

    fn move_up(&mut self) {
        match self.cursor_panel {
            0 => {
                if self.col_cursor > 0 {
                    self.col_cursor -= 1;
                    self.ensure_cursor_in_view();
                }
            }
            1 => {
                if self.dir_cursor > 0 {
                    self.dir_cursor -= 1;
                }
            }
            _ => {}
        }
    }

    fn switch_focus(&mut self) {
        self.cursor_panel = (self.cursor_panel + 1) % 2;
    }

    fn choose_current(&mut self) {
        match self.cursor_panel {
            0 => self.selected_col = self.col_cursor,
            1 => {
                self.selected_dir = if self.dir_cursor == 0 {
                    SortDirection::Asc
                } else {
                    SortDirection::Desc
                }
            }
            _ => {}
        }
    }
}

impl FloatContent for SortMenu {
    fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(Clear, area);
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Sorting Options ")
            .title_alignment(Alignment::Center);
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(75), Constraint::Percentage(25)].as_ref())
            .split(inner);

        // ==== SORT BY ====
        let visible_height = layout[0].height.saturating_sub(2) as usize;
        self.last_visible_height = visible_height.max(1);
        self.ensure_cursor_in_view();

        let visible_items: Vec<_> = self
            .columns
            .iter()
            .enumerate()
            .skip(self.col_scroll)
            .take(self.last_visible_height)
            .map(|(i, col)| {
                let mark = if i == self.selected_col { "[x]" } else { "[ ]" };
                let mut item = ListItem::new(format!("{mark} {col}"));
                if self.cursor_panel == 0 && i == self.col_cursor {
                    item = item.style(
                        Style::default()
                            .fg(theme.selection_fg())
                            .bg(theme.selection_bg())
                            .add_modifier(Modifier::BOLD),
                    );
                }
                item
            })
            .collect();

        let col_block = Block::default()
            .borders(Borders::ALL)
            .title(" Sort By ")
            .border_type(BorderType::Rounded)
            .border_style(if self.cursor_panel == 0 {
                Style::default().fg(theme.focused_color())
            } else {
                Style::default().fg(theme.unfocused_color())
            });

        frame.render_widget(List::new(visible_items).block(col_block), layout[0]);

        // ==== ORDER ====
        let dirs = [SortDirection::Asc, SortDirection::Desc];
        let dir_items: Vec<_> = dirs
            .iter()
            .enumerate()
            .map(|(i, dir)| {
                let mark = if *dir == self.selected_dir { "[x]" } else { "[ ]" };
                let mut item = ListItem::new(format!("{mark} {}", dir.label()));
                if self.cursor_panel == 1 && i == self.dir_cursor {
                    item = item.style(
                        Style::default()
                            .fg(theme.selection_fg())
                            .bg(theme.selection_bg())
                            .add_modifier(Modifier::BOLD),
                    );
                }
                item
            })
            .collect();

        let dir_block = Block::default()
            .borders(Borders::ALL)
            .title(" Order ")
            .border_type(BorderType::Rounded)
            .border_style(if self.cursor_panel == 1 {
                Style::default().fg(theme.focused_color())
            } else {
                Style::default().fg(theme.unfocused_color())
            });
        frame.render_widget(List::new(dir_items).block(dir_block), layout[1]);
    }

    fn handle_key_event(&mut self, key: &KeyEvent) -> bool {
        use KeyCode::*;
        match key.code {
            Char('q') | Esc => {
                self.finished = true;
                self.cancelled = true;
            }
            Enter => {
                self.finished = true;
            }
            Tab => self.switch_focus(),
            Char('j') | Down => self.move_down(),
            Char('k') | Up => self.move_up(),
            Char(' ') => self.choose_current(),
            _ => {}
        }
        self.finished
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn get_shortcut_list(&self) -> (&str, Box<[Shortcut]>) {
        (
            "Sort Menu",
            shortcuts!(
                ("Move selection", ["j", "k", "↑", "↓"]),
                ("Switch panel", ["Tab"]),
                ("Select option", ["Space"]),
                ("Confirm", ["Enter"]),
                ("Cancel", ["q", "Esc"])
            ),
        )
    }
}
