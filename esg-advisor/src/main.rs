use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

mod app;
mod ui;
mod utils;

use app::App;

/// ESG advisory chat prototype: simulated agent, canned responses, no network
#[derive(Parser, Debug)]
#[command(name = "esg-advisor", version)]
struct Args {
    /// Advisor profile YAML; falls back to the user config file, then the
    /// built-in Borgo Egnazia profile
    #[arg(short, long)]
    profile: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let profile = utils::load_profile(args.profile.as_deref())?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(profile);
    let result = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.on_tick();
        terminal.draw(|f| ui::ui(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Overlays capture input while open.
    if app.show_file_browser {
        handle_file_browser_key(app, key);
        return;
    }
    if app.show_report {
        handle_report_key(app, key);
        return;
    }
    handle_chat_key(app, key);
}

fn handle_file_browser_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_file_browser(),
        KeyCode::Up => app.file_browser_previous(),
        KeyCode::Down => app.file_browser_next(),
        KeyCode::Enter => app.file_browser_select(),
        KeyCode::Backspace => {
            app.file_browser_search.pop();
            app.file_browser_selected = 0;
        }
        KeyCode::Char(c) => {
            app.file_browser_search.push(c);
            app.file_browser_selected = 0;
        }
        _ => {}
    }
}

fn handle_report_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_report(),
        KeyCode::Up => app.report_scroll = app.report_scroll.saturating_sub(1),
        KeyCode::Down => app.report_scroll = app.report_scroll.saturating_add(1),
        KeyCode::PageUp => app.report_scroll = app.report_scroll.saturating_sub(10),
        KeyCode::PageDown => app.report_scroll = app.report_scroll.saturating_add(10),
        _ => {}
    }
}

fn handle_chat_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('r') => app.start_research(),
            KeyCode::Char('o') => app.open_report(),
            KeyCode::Char('a') => app.open_file_browser(),
            KeyCode::Char('x') => app.pending_attachments.clear(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Enter => app.send_message(),
        KeyCode::Backspace => {
            app.input_buffer.pop();
        }
        KeyCode::Tab => app.next_pane(),
        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(10),
        KeyCode::PageDown => app.scroll_down(10),
        KeyCode::Char(c) => app.input_buffer.push(c),
        _ => {}
    }
}
