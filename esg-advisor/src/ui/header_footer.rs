//! Header and footer rendering functions

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title = format!(
        "ESG Advisor v0.1.0 - {}",
        app.session.profile().client_name
    );

    let mut spans = vec![Span::styled(
        title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    if app.session.report_available() {
        spans.push(Span::raw("      "));
        spans.push(Span::styled(
            "[Ctrl+O] View strategy report",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let header =
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let footer_text = if app.show_file_browser {
        Line::from(vec![
            Span::styled("[\u{2191}\u{2193}]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Navigate  "),
            Span::styled("TYPE", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" to search  "),
            Span::styled("[Enter]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Select  "),
            Span::styled("[Esc]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Cancel"),
        ])
    } else if app.show_report {
        Line::from(vec![
            Span::styled("[\u{2191}\u{2193}]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Scroll  "),
            Span::styled("[PgUp/PgDn]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Page  "),
            Span::styled("[Esc]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Close"),
        ])
    } else {
        let mut spans = vec![
            Span::styled("[Enter]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Send  "),
            Span::styled("[Ctrl+A]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Attach  "),
            Span::styled("[Tab]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Pane  "),
        ];
        let research_running = app
            .session
            .research()
            .map(|run| run.is_running())
            .unwrap_or(false);
        if app.session.research_offered() && !research_running {
            spans.push(Span::styled(
                "[Ctrl+R]",
                Style::default().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" Create strategy  "));
        }
        if app.session.report_available() {
            spans.push(Span::styled(
                "[Ctrl+O]",
                Style::default().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" Report  "));
        }
        spans.push(Span::styled(
            "[Ctrl+C]",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" Quit"));
        Line::from(spans)
    };

    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
