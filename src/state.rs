use crate::{
    cli::Args,
    confirm::ConfirmDialog,
    controller::{DatasetController, RecordId},
    dashboards::builtin_dashboards,
    detail::RecordDetail,
    filter::{Filter, ParsedSearch, SearchAction},
    float::{Float, FloatContent},
    form::RecordForm,
    sort::SortMenu,
    terminal_check::{draw_too_small_warning, is_too_small},
    theme::Theme,
};
use anyhow::{Context, Result};
use itertools::Itertools;
use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row},
};
use std::time::Duration;

pub enum Mode {
    DashboardList,
    RecordTable,
}

/// What a pending confirm dialog will do once answered.
enum PendingConfirm {
    Quit,
    Delete(RecordId),
}

/// One admin screen: its identity plus the controller that owns its
/// records. Controllers live for the whole session, so view state survives
/// switching screens.
struct Screen {
    slug: &'static str,
    title: &'static str,
    controller: DatasetController,
}

pub struct App {
    theme: Theme,
    mode: Mode,
    screens: Vec<Screen>,
    active: usize,
    list_state: ListState,
    /// Selection within the currently visible page.
    row_sel: usize,
    filter: Filter,
    status: Option<String>,
    sort_menu: Option<Float<SortMenu>>,
    form: Option<Float<RecordForm>>,
    /// Target of an open edit form; `None` while creating.
    editing: Option<RecordId>,
    confirm: Option<Float<ConfirmDialog>>,
    pending: Option<PendingConfirm>,
    detail_float: Option<Float<RecordDetail>>,
}

impl App {
    pub fn new(args: Args) -> Result<Self> {
        let dashboards = builtin_dashboards();
        let slugs: Vec<&str> = dashboards.iter().map(|d| d.slug).collect();
        args.validate(&slugs)?;

        let mut screens = Vec::with_capacity(dashboards.len());
        for d in dashboards {
            let mut controller = DatasetController::new(d.schema.clone(), args.page_size);
            let targeted = args
                .dashboard
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(d.slug));
            match args.data.as_deref().filter(|_| targeted) {
                Some(path) => {
                    let rows = crate::data::load_rows(path, &d.schema)
                        .with_context(|| format!("loading data for dashboard '{}'", d.slug))?;
                    controller.seed(rows);
                }
                None => controller.seed(d.seed),
            }
            screens.push(Screen {
                slug: d.slug,
                title: d.title,
                controller,
            });
        }

        let active = args
            .dashboard
            .as_deref()
            .and_then(|s| screens.iter().position(|sc| sc.slug.eq_ignore_ascii_case(s)))
            .unwrap_or(0);
        let mode = if args.dashboard.is_some() {
            Mode::RecordTable
        } else {
            Mode::DashboardList
        };

        let mut list_state = ListState::default();
        list_state.select(Some(active));

        Ok(Self {
            theme: Theme::Default,
            mode,
            screens,
            active,
            list_state,
            row_sel: 0,
            filter: Filter::default(),
            status: None,
            sort_menu: None,
            form: None,
            editing: None,
            confirm: None,
            pending: None,
            detail_float: None,
        })
    }

    pub fn run(
        &mut self,
        term: &mut Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        loop {
            term.draw(|f| self.draw(f))?;
            if !event::poll(Duration::from_millis(50))? {
                continue;
            }
            match event::read()? {
                Event::Key(k) => {
                    if k.kind == KeyEventKind::Release {
                        continue;
                    }
                    if !self.handle_key(k) {
                        break;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn controller(&self) -> &DatasetController {
        &self.screens[self.active].controller
    }

    fn controller_mut(&mut self) -> &mut DatasetController {
        &mut self.screens[self.active].controller
    }

    // Modifiers matter here (the search bar binds Ctrl+c), so the full
    // event is passed through, not just the key code.
    fn handle_key(&mut self, ev: KeyEvent) -> bool {
        // Floating windows take priority, top-most first.
        if let Some(ref mut float) = self.form {
            float.handle_key_event(&ev);
            if float.content.is_finished() {
                let submitted = float.content.submitted();
                let fields = float.content.fields();
                self.form = None;
                let editing = self.editing.take();
                if submitted {
                    let outcome = match editing {
                        Some(id) => self
                            .controller_mut()
                            .update(id, &fields)
                            .map(|r| format!("Updated record {}", r.id)),
                        None => self
                            .controller_mut()
                            .create(&fields)
                            .map(|r| format!("Created record {}", r.id)),
                    };
                    self.status = Some(match outcome {
                        Ok(msg) => msg,
                        Err(e) => e.to_string(),
                    });
                    self.clamp_row_sel();
                }
            }
            return true;
        }

        if let Some(ref mut float) = self.confirm {
            float.handle_key_event(&ev);
            if float.content.is_finished() {
                let confirmed = float.content.confirmed();
                self.confirm = None;
                match self.pending.take() {
                    Some(PendingConfirm::Quit) if confirmed => return false,
                    Some(PendingConfirm::Delete(id)) if confirmed => {
                        let label = self
                            .controller()
                            .get(id)
                            .and_then(|r| r.values.first().cloned());
                        // Silent no-op if the record is already gone.
                        self.controller_mut().remove(id);
                        self.status = Some(match label {
                            Some(v) if !v.is_empty() => format!("Deleted record {id} ({v})"),
                            _ => format!("Deleted record {id}"),
                        });
                        self.clamp_row_sel();
                    }
                    _ => {}
                }
            }
            return true;
        }

        if let Some(ref mut float) = self.detail_float {
            let finished = float.handle_key_event(&ev);
            if finished && float.content.is_finished() {
                self.detail_float = None;
            }
            return true;
        }

        if let Some(ref mut float) = self.sort_menu {
            float.handle_key_event(&ev);
            if float.content.is_finished() {
                let cancelled = float.content.cancelled;
                let col = float.content.columns[float.content.selected_col].clone();
                let dir = float.content.selected_dir;
                self.sort_menu = None;
                if !cancelled {
                    match self.controller_mut().set_sort(&col, dir) {
                        Ok(()) => {
                            self.status = Some(format!("Sorted by {col} ({})", dir.label()));
                        }
                        Err(e) => self.status = Some(e.to_string()),
                    }
                    self.row_sel = 0;
                }
            }
            return true;
        }

        if self.filter.active() {
            if let SearchAction::Exit = self.filter.handle_key(&ev) {
                let parsed = self.filter.parsed();
                self.filter.deactivate();
                self.apply_search(parsed);
            }
            return true;
        }

        match self.mode {
            Mode::DashboardList => self.handle_key_list(ev.code),
            Mode::RecordTable => self.handle_key_table(ev.code),
        }
    }

    /// Commit a search line: replace query and filters wholesale, then
    /// start from page 1 (new criteria invalidate the old offset).
    fn apply_search(&mut self, parsed: ParsedSearch) {
        let mut bad = Vec::new();
        {
            let controller = self.controller_mut();
            controller.clear_filters();
            controller.set_query(&parsed.query);
            for (field, value) in &parsed.filters {
                if let Err(e) = controller.set_filter(field, value) {
                    bad.push(e.to_string());
                }
            }
            controller.set_page(1);
        }
        self.row_sel = 0;
        self.status = if bad.is_empty() {
            None
        } else {
            Some(bad.iter().join("; "))
        };
    }

    fn handle_key_list(&mut self, code: KeyCode) -> bool {
        use KeyCode::*;
        match code {
            Char('q') | Esc => {
                self.pending = Some(PendingConfirm::Quit);
                self.confirm = Some(Float::new_absolute(Box::new(ConfirmDialog::quit()), 40, 7));
            }
            Up | Char('k') => self.move_sel_up(),
            Down | Char('j') => self.move_sel_down(),
            Enter | Right | Char('l') => {
                if let Some(idx) = self.list_state.selected() {
                    self.active = idx;
                    self.mode = Mode::RecordTable;
                    self.row_sel = 0;
                    self.status = None;
                }
            }
            _ => {}
        }
        true
    }

    fn handle_key_table(&mut self, code: KeyCode) -> bool {
        use KeyCode::*;
        match code {
            Char('q') | Esc => {
                self.mode = Mode::DashboardList;
                self.status = None;
            }
            Down | Char('j') => {
                let page_len = self.controller().visible_page().rows.len();
                if self.row_sel + 1 < page_len {
                    self.row_sel += 1;
                }
            }
            Up | Char('k') => {
                self.row_sel = self.row_sel.saturating_sub(1);
            }
            Left | Char('h') => {
                let page = self.controller().page();
                self.controller_mut().set_page(page.saturating_sub(1).max(1));
                self.row_sel = 0;
            }
            Right | Char('l') => {
                let page = self.controller().page();
                self.controller_mut().set_page(page + 1);
                self.row_sel = 0;
            }
            Char('/') => {
                self.filter.activate();
            }
            Char('c') => {
                self.filter.clear();
                let controller = self.controller_mut();
                controller.clear_filters();
                controller.set_page(1);
                self.row_sel = 0;
                self.status = Some("Cleared search and filters".into());
            }
            Char('s') => {
                let columns = self.controller().schema().field_names();
                let (default_col, default_dir) = match self.controller().sort() {
                    Some((idx, dir)) => (idx, dir),
                    None => (0, crate::controller::SortDirection::Asc),
                };
                self.sort_menu = Some(Float::new_absolute(
                    Box::new(SortMenu::new(columns, default_col, default_dir)),
                    60,
                    20,
                ));
            }
            Char(ch @ '1'..='9') => {
                // Direct sort toggle on the n-th column.
                let idx = ch as usize - '1' as usize;
                let name = self
                    .controller()
                    .schema()
                    .fields()
                    .get(idx)
                    .map(|f| f.name.clone());
                if let Some(name) = name {
                    // The name comes from the schema, so this cannot fail.
                    if self.controller_mut().toggle_sort(&name).is_ok() {
                        let dir = self.controller().sort().map(|(_, d)| d.label()).unwrap_or("");
                        self.status = Some(format!("Sorted by {name} ({dir})"));
                        self.row_sel = 0;
                    }
                }
            }
            Char('0') => {
                self.controller_mut().clear_sort();
                self.status = Some("Sorting cleared".into());
            }
            Char('n') => {
                self.editing = None;
                let names = self.controller().schema().field_names();
                self.form = Some(Float::new(Box::new(RecordForm::create(names)), 60, 60));
            }
            Char('e') => {
                if let Some(rec) = self.selected_record() {
                    self.editing = Some(rec.id);
                    let names = self.controller().schema().field_names();
                    self.form = Some(Float::new(
                        Box::new(RecordForm::edit(names, &rec.values)),
                        60,
                        60,
                    ));
                }
            }
            Char('d') => {
                if let Some(rec) = self.selected_record() {
                    let label = match rec.values.first() {
                        Some(v) if !v.is_empty() => format!("{} ({v})", rec.id),
                        _ => rec.id.to_string(),
                    };
                    self.pending = Some(PendingConfirm::Delete(rec.id));
                    self.confirm = Some(Float::new_absolute(
                        Box::new(ConfirmDialog::delete(&label)),
                        50,
                        8,
                    ));
                }
            }
            Enter => {
                if let Some(rec) = self.selected_record() {
                    let detail = RecordDetail::new(&rec, self.controller().schema());
                    self.detail_float = Some(Float::new_absolute(Box::new(detail), 60, 14));
                }
            }
            Char('+') | Char('=') => {
                let ps = self.controller().page_size();
                self.controller_mut().set_page_size(ps + 5);
                self.row_sel = 0;
            }
            Char('-') => {
                let ps = self.controller().page_size();
                self.controller_mut().set_page_size(ps.saturating_sub(5));
                self.row_sel = 0;
            }
            _ => {}
        }
        true
    }

    fn selected_record(&self) -> Option<crate::controller::Record> {
        self.controller()
            .visible_page()
            .rows
            .get(self.row_sel)
            .cloned()
    }

    fn clamp_row_sel(&mut self) {
        let page_len = self.controller().visible_page().rows.len();
        if page_len == 0 {
            self.row_sel = 0;
        } else if self.row_sel >= page_len {
            self.row_sel = page_len - 1;
        }
    }

    fn move_sel_up(&mut self) {
        let len = self.screens.len();
        let i = self.list_state.selected().unwrap_or(0);
        let next = if i == 0 { len - 1 } else { i - 1 };
        self.list_state.select(Some(next));
    }

    fn move_sel_down(&mut self) {
        let len = self.screens.len();
        let i = self.list_state.selected().unwrap_or(0);
        let next = if i >= len - 1 { 0 } else { i + 1 };
        self.list_state.select(Some(next));
    }

    fn draw(&mut self, f: &mut Frame) {
        let area = f.area();
        if is_too_small(area) {
            draw_too_small_warning(f, area);
            return;
        }

        let (_title, shortcuts) = self.get_current_shortcuts();
        let lines = crate::hint::create_shortcut_list(shortcuts, area.width);
        let hint_height = (lines.len() as u16 + 2).clamp(3, 10);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),           // header
                Constraint::Min(1),              // body
                Constraint::Length(1),           // status line
                Constraint::Length(hint_height), // hint
            ])
            .split(area);

        let screen_title = match self.mode {
            Mode::DashboardList => "Dashboards".to_string(),
            Mode::RecordTable => self.screens[self.active].title.to_string(),
        };
        let title = Paragraph::new(format!("Back Office  |  {screen_title}"))
            .style(Style::default().fg(self.theme.title_color()));
        f.render_widget(title, chunks[0]);

        match self.mode {
            Mode::DashboardList => {
                let body = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
                    .split(chunks[1]);
                self.draw_dashboard_list(f, body[0]);
                self.draw_preview(f, body[1]);
            }
            Mode::RecordTable => {
                self.draw_table(f, chunks[1]);
            }
        }

        self.draw_status(f, chunks[2]);
        self.draw_hint(f, chunks[3]);

        if let Some(ref mut float) = self.sort_menu {
            float.draw(f, f.area(), &self.theme);
        }
        if let Some(ref mut float) = self.detail_float {
            float.draw(f, f.area(), &self.theme);
        }
        if let Some(ref mut float) = self.form {
            float.draw(f, f.area(), &self.theme);
        }
        if let Some(ref mut float) = self.confirm {
            float.draw(f, f.area(), &self.theme);
        }
    }

    fn draw_dashboard_list(&mut self, f: &mut Frame, area: Rect) {
        let items = self
            .screens
            .iter()
            .map(|s| {
                let label = format!("{} ({})", s.title, s.controller.len());
                ListItem::new(label).style(Style::default().fg(self.theme.dashboard_color()))
            })
            .collect::<Vec<_>>();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title(" Dashboards ");
        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(self.theme.selection_fg())
                .bg(self.theme.selection_bg())
                .add_modifier(Modifier::BOLD),
        );

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn draw_preview(&mut self, f: &mut Frame, area: Rect) {
        let idx = self.list_state.selected().unwrap_or(0);
        let screen = &self.screens[idx];
        let mut lines = Vec::new();

        lines.push(
            Line::from(format!("Preview — {}", screen.title)).style(
                Style::default()
                    .fg(self.theme.unfocused_color())
                    .add_modifier(Modifier::BOLD),
            ),
        );

        let view = screen.controller.visible_page();
        if view.rows.is_empty() {
            lines.push(
                Line::from("No records.").style(
                    Style::default()
                        .fg(self.theme.unfocused_color())
                        .add_modifier(Modifier::ITALIC),
                ),
            );
        }
        for rec in view.rows.iter().take(8) {
            let summary = rec.values.iter().take(4).join("  ");
            lines.push(Line::from(format!("{:>3}. {summary}", rec.no)));
        }

        let p = Paragraph::new(Text::from(lines)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Preview ")
                .border_type(ratatui::widgets::BorderType::Rounded),
        );
        f.render_widget(p, area);
    }

    fn draw_table(&mut self, f: &mut Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // search bar + sort info
                Constraint::Min(5),    // table
            ])
            .split(area);

        let header_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(layout[0]);

        self.filter.draw(f, header_chunks[0]);

        let sort_text = match self.controller().sort() {
            Some((idx, dir)) => {
                let name = &self.controller().schema().fields()[idx].name;
                format!("Sort by: {name}   |   Order: {}", dir.label())
            }
            None => "Sort by: —".to_string(),
        };
        let sort_block = Block::default()
            .borders(Borders::ALL)
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title(" Sorting ")
            .title_alignment(Alignment::Left);
        let sort_para = Paragraph::new(sort_text)
            .alignment(Alignment::Center)
            .block(sort_block);
        f.render_widget(sort_para, header_chunks[1]);

        if self.controller().is_empty() {
            let p = Paragraph::new("No records yet — press n to add one.")
                .style(Style::default().fg(self.theme.info_color()))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Info ")
                        .border_type(ratatui::widgets::BorderType::Rounded),
                );
            f.render_widget(p, layout[1]);
            return;
        }

        let view = self.controller().visible_page();
        self.row_sel = self.row_sel.min(view.rows.len().saturating_sub(1));

        let field_names = self.controller().schema().field_names();
        let mut header_cells = vec![Cell::from("No").style(
            Style::default()
                .fg(self.theme.table_header())
                .bg(self.theme.border_color())
                .add_modifier(Modifier::BOLD),
        )];
        header_cells.extend(field_names.iter().map(|h| {
            Cell::from(h.as_str()).style(
                Style::default()
                    .fg(self.theme.table_header())
                    .bg(self.theme.border_color())
                    .add_modifier(Modifier::BOLD),
            )
        }));
        let header = Row::new(header_cells);

        let mut rows = Vec::new();
        for (i, rec) in view.rows.iter().enumerate() {
            let bg = if i % 2 == 0 {
                self.theme.table_row_even()
            } else {
                self.theme.table_row_odd()
            };
            let style = if i == self.row_sel {
                Style::default()
                    .bg(self.theme.selection_bg())
                    .fg(self.theme.selection_fg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().bg(bg)
            };
            let mut cells = vec![Cell::from(rec.no.to_string()).style(style)];
            cells.extend(rec.values.iter().map(|v| Cell::from(v.clone()).style(style)));
            rows.push(Row::new(cells));
        }

        let page_label = if view.total_pages == 0 {
            "Page 1/1".to_string()
        } else {
            format!("Page {}/{}", view.page, view.total_pages)
        };
        let table = ratatui::widgets::Table::new(rows, self.column_widths(area.width))
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(ratatui::widgets::BorderType::Rounded)
                    .title(format!(
                        " {} — {} records  |  {page_label} ",
                        self.screens[self.active].title, view.total_filtered
                    )),
            );
        f.render_widget(table, layout[1]);
    }

    fn draw_status(&self, f: &mut Frame, area: Rect) {
        let text = match &self.status {
            Some(msg) => msg.clone(),
            None => {
                let mut parts = Vec::new();
                let query = self.controller().query();
                if !query.is_empty() {
                    parts.push(format!("Search: \"{query}\""));
                }
                let filters = self.controller().active_filters();
                if !filters.is_empty() {
                    parts.push(format!(
                        "Filters: {}",
                        filters.iter().map(|(k, v)| format!("{k}={v}")).join("  ")
                    ));
                }
                parts.join("   ")
            }
        };
        let p = Paragraph::new(text).style(Style::default().fg(self.theme.status_color()));
        f.render_widget(p, area);
    }

    fn draw_hint(&self, f: &mut Frame, area: Rect) {
        let (title, shortcuts) = self.get_current_shortcuts();
        let lines = crate::hint::create_shortcut_list(shortcuts, area.width);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title(format!(" {title} Shortcuts "));

        let para = Paragraph::new(lines.to_vec())
            .block(block)
            .wrap(ratatui::widgets::Wrap { trim: false });

        f.render_widget(para, area);
    }

    fn column_widths(&self, total: u16) -> Vec<Constraint> {
        let cols = self.controller().schema().len().max(1) as u16;
        let rest = total.saturating_sub(4 + 4);
        let w = rest.checked_div(cols).unwrap_or(1);
        let mut widths = vec![Constraint::Length(4)];
        widths.extend((0..cols).map(|_| Constraint::Length(w)));
        widths
    }

    fn get_current_shortcuts(&self) -> (&str, Box<[crate::hint::Shortcut]>) {
        if let Some(ref float) = self.form {
            return float.get_shortcut_list();
        }
        if let Some(ref float) = self.confirm {
            return float.get_shortcut_list();
        }
        if let Some(ref float) = self.detail_float {
            return float.get_shortcut_list();
        }
        if let Some(ref float) = self.sort_menu {
            return float.get_shortcut_list();
        }
        if self.filter.active() {
            (
                "Search",
                crate::shortcuts!(
                    ("Commit search", ["Enter"]),
                    ("Move cursor", ["←", "→"]),
                    ("Delete char", ["Backspace"]),
                    ("Clear & exit", ["Ctrl+c"]),
                ),
            )
        } else {
            match self.mode {
                Mode::DashboardList => (
                    "Dashboard List",
                    crate::shortcuts!(
                        ("Move", ["j", "k", "↑", "↓"]),
                        ("Open dashboard", ["Enter", "l", "→"]),
                        ("Quit", ["q"]),
                    ),
                ),
                Mode::RecordTable => (
                    "Records",
                    crate::shortcuts!(
                        ("Move", ["j", "k"]),
                        ("Page", ["h", "l"]),
                        ("Page size", ["+", "-"]),
                        ("Detail", ["Enter"]),
                        ("New", ["n"]),
                        ("Edit", ["e"]),
                        ("Delete", ["d"]),
                        ("Search", ["/"]),
                        ("Clear search", ["c"]),
                        ("Sort menu", ["s"]),
                        ("Sort column", ["1", "-", "9"]),
                        ("Clear sort", ["0"]),
                        ("Back", ["q"]),
                    ),
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;

    fn app() -> App {
        App::new(Args {
            dashboard: Some("invoices".into()),
            data: None,
            page_size: 10,
        })
        .unwrap()
    }

    #[test]
    fn ctrl_c_clears_and_closes_the_search_bar() {
        let mut app = app();
        app.handle_key(KeyEvent::from(KeyCode::Char('/')));
        assert!(app.filter.active());

        app.handle_key(KeyEvent::from(KeyCode::Char('m')));
        assert_eq!(app.filter.term(), "m");

        // Modifiers must survive the key routing for this binding to work.
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.filter.active());
        assert!(app.filter.term().is_empty());
        assert!(app.controller().query().is_empty());
    }

    #[test]
    fn committed_search_line_reaches_the_controller() {
        let mut app = app();
        app.handle_key(KeyEvent::from(KeyCode::Char('/')));
        for ch in "mitra status=unpaid".chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(ch)));
        }
        app.handle_key(KeyEvent::from(KeyCode::Enter));

        assert!(!app.filter.active());
        assert_eq!(app.controller().query(), "mitra");
        assert_eq!(
            app.controller().active_filters(),
            vec![("Status".to_string(), "unpaid".to_string())]
        );
    }
}
