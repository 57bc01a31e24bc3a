mod cli;
mod confirm;
mod controller;
mod dashboards;
mod data;
mod detail;
mod filter;
mod float;
mod form;
mod hint;
mod schema;
mod sort;
mod state;
mod terminal_check;
mod theme;

use crate::{cli::Args, state::App};
use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;

fn main() -> Result<()> {
    let args = <Args as clap::Parser>::parse();
    let mut app = match App::new(args) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("\n{e:#}");
            std::process::exit(1);
        }
    };

    // --- setup terminal
    let mut out = stdout();
    out.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut term = Terminal::new(CrosstermBackend::new(out))?;
    term.clear()?;

    let res = app.run(&mut term);

    // restore terminal
    disable_raw_mode()?;
    let backend = term.backend_mut();
    backend.execute(LeaveAlternateScreen)?;
    term.show_cursor()?;

    res
}
