//! Strategy report overlay

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::centered_rect;

pub fn render_report(f: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect(80, 85, area);
    f.render_widget(Clear, popup);

    let report = &app.session.profile().report;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", report.title))
        .style(Style::default().fg(Color::Green));

    if app.report_loading() {
        let loader = Paragraph::new("Loading report...")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(loader, popup);
        return;
    }

    let mut lines = Vec::new();
    for section in &report.sections {
        lines.push(Line::from(Span::styled(
            section.heading.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        for part in section.body.lines() {
            lines.push(Line::from(part.to_string()));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "[\u{2191}\u{2193}] Scroll  [Esc] Close",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.report_scroll, 0));
    f.render_widget(widget, popup);
}
