//! UI rendering for the advisor TUI
//!
//! All rendering reads the [`App`] snapshot; nothing here mutates state.
//! The chat column always renders; the research panel joins the side
//! column once the responder has offered the workflow, and the report and
//! attachment picker draw as overlays on top.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

mod chat_view;
mod components;
mod header_footer;
mod report_view;
mod research_view;
mod trace_view;

pub use chat_view::render_chat;
pub use components::{centered_rect, render_file_browser};
pub use header_footer::{render_footer, render_header};
pub use report_view::render_report;
pub use research_view::render_research;
pub use trace_view::render_trace;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    if app.session.research_offered() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(46)])
            .split(chunks[1]);
        render_chat(f, columns[0], app);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(10)])
            .split(columns[1]);
        render_research(f, side[0], app);
        render_trace(f, side[1], app);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(36)])
            .split(chunks[1]);
        render_chat(f, columns[0], app);
        render_trace(f, columns[1], app);
    }

    render_footer(f, chunks[2], app);

    if app.show_file_browser {
        render_file_browser(f, f.area(), app);
    }
    if app.show_report {
        render_report(f, f.area(), app);
    }
}
