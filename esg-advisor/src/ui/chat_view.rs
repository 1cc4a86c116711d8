//! Chat view rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use esg_advisor_engine::message::{MessageBody, Origin};

use crate::app::App;

pub fn render_chat(f: &mut Frame, area: Rect, app: &App) {
    let has_attachments = !app.pending_attachments.is_empty();
    let constraints = if has_attachments {
        vec![
            Constraint::Min(0),    // Messages
            Constraint::Length(1), // Attachment preview
            Constraint::Length(3), // Input box
        ]
    } else {
        vec![Constraint::Min(0), Constraint::Length(3)]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_messages(f, chunks[0], app);

    if has_attachments {
        let preview = Line::from(vec![
            Span::styled("\u{1F4CE} ", Style::default().fg(Color::Yellow)),
            Span::raw(app.pending_attachments.join(", ")),
            Span::styled("  [Ctrl+X] clear", Style::default().fg(Color::DarkGray)),
        ]);
        f.render_widget(Paragraph::new(preview), chunks[1]);
    }

    let (input_title, input_color) = if app.session.awaiting_reply() {
        (" Waiting for the assistant... ", Color::DarkGray)
    } else {
        (" Type your message (Enter to send) ", Color::White)
    };
    let input = Paragraph::new(app.input_buffer.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(input_title)
            .style(Style::default().fg(input_color)),
    );
    f.render_widget(input, chunks[chunks.len() - 1]);
}

fn render_messages(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for message in app.session.log() {
        let label_style = match message.origin {
            Origin::User => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Origin::Agent => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", message.author_label), label_style),
            Span::styled(
                message.created_at.format("%H:%M:%S").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        match &message.body {
            MessageBody::Text(text) => {
                for part in text.lines() {
                    lines.push(Line::from(part.to_string()));
                }
            }
            MessageBody::ResearchPanel => {
                lines.push(Line::from(Span::styled(
                    "Research workflow ready \u{2014} press [Ctrl+R] to create the strategy",
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                )));
            }
        }

        for attachment in &message.attachments {
            lines.push(Line::from(vec![
                Span::styled("  \u{1F4CE} ", Style::default().fg(Color::Yellow)),
                Span::raw(attachment.clone()),
            ]));
        }
        lines.push(Line::from(""));
    }

    if app.session.awaiting_reply() {
        lines.push(Line::from(Span::styled(
            format!(
                "{} Assistant is thinking... ({}s)",
                app.spinner_char(),
                app.thinking_seconds()
            ),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    // Follow the newest entry unless the user scrolled up.
    let viewport = area.height.saturating_sub(2);
    let offset = super::components::follow_bottom_offset(lines.len(), viewport, app.message_scroll);

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Chat \u{2014} {} ", app.session.profile().client_name))
                .style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    f.render_widget(widget, area);
}
