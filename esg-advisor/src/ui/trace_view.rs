//! Session trace pane

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use esg_advisor_engine::session::SessionEvent;

use crate::app::{ActivePane, App};

pub fn render_trace(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .session
        .events()
        .iter()
        .map(|event| Line::from(format_event(event)))
        .collect();

    // Follow the newest entry unless the user scrolled up.
    let viewport = area.height.saturating_sub(2);
    let offset = super::components::follow_bottom_offset(lines.len(), viewport, app.trace_scroll);

    let border_color = if app.active_pane == ActivePane::Trace {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Session Trace ")
                .style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    f.render_widget(widget, area);
}

fn format_event(event: &SessionEvent) -> String {
    match event {
        SessionEvent::IntroDelivered => "intro delivered".to_string(),
        SessionEvent::ReplyScheduled { delay_ms } => {
            format!("reply scheduled (+{}ms)", delay_ms)
        }
        SessionEvent::ReplyDelivered { rule } => format!("reply delivered ({})", rule),
        SessionEvent::DeliveryFailureAbsorbed { detail } => {
            format!("delivery failed, apology substituted: {}", detail)
        }
        SessionEvent::ResearchPanelOffered => "research panel offered".to_string(),
        SessionEvent::ResearchStarted => "research started".to_string(),
        SessionEvent::StageActivated { index, title } => {
            format!("stage {} active: {}", index + 1, title)
        }
        SessionEvent::SubtaskCompleted { name } => format!("subtask done: {}", name),
        SessionEvent::ResearchCompleted => "research completed".to_string(),
    }
}
