//! Research panel rendering
//!
//! Stage markers and subtask checkboxes are derived from the run state on
//! every draw; nothing here is cached between frames.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use esg_advisor_engine::research::StageStatus;

use crate::app::App;

pub fn render_research(f: &mut Frame, area: Rect, app: &App) {
    let plan = &app.session.profile().plan;
    let run = app.session.research();
    let completed = run.is_some_and(|r| r.is_completed());
    let running = run.is_some_and(|r| r.is_running());

    let mut lines: Vec<Line> = Vec::new();

    if completed {
        lines.push(Line::from(Span::styled(
            "\u{2714} ESG Strategy Complete!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "Your tailored ESG strategy is ready to view.",
            Style::default().fg(Color::Green),
        )));
        lines.push(Line::from(""));
    }

    for (idx, stage) in plan.stages.iter().enumerate() {
        let status = run
            .map(|r| r.stage_status(idx))
            .unwrap_or(StageStatus::Pending);
        let (marker, style) = match status {
            StageStatus::Completed => ("\u{2714}", Style::default().fg(Color::Green)),
            StageStatus::Active => (
                "\u{25BA}",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            StageStatus::Pending => ("\u{25CB}", Style::default().fg(Color::DarkGray)),
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{} ", marker), style),
            Span::styled(stage.title.clone(), style.add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", stage.description),
            Style::default().fg(Color::DarkGray),
        )));

        // Subtasks only show once their stage is active or done.
        if stage.has_subtasks() && status != StageStatus::Pending {
            if let Some(run) = run {
                for group in &stage.subtask_groups {
                    lines.push(Line::from(Span::styled(
                        format!("   {}", group.category),
                        Style::default().add_modifier(Modifier::UNDERLINED),
                    )));
                    for subtask in &group.subtasks {
                        let done = run.subtask_done(idx, &subtask.name);
                        let (mark, item_style) = if done {
                            ("[x]", Style::default().fg(Color::Green))
                        } else {
                            ("[ ]", Style::default().fg(Color::DarkGray))
                        };
                        lines.push(Line::from(vec![
                            Span::styled(format!("   {} ", mark), item_style),
                            Span::raw(subtask.name.clone()),
                        ]));
                    }
                }
            }
        }
        lines.push(Line::from(""));
    }

    let footer = if completed {
        "Analysis complete"
    } else if running {
        "Researching..."
    } else {
        plan.estimate_label.as_str()
    };
    lines.push(Line::from(Span::styled(
        format!("\u{23F1} {}", footer),
        Style::default().fg(Color::DarkGray),
    )));

    if !completed {
        let control = if running {
            Span::styled("Creating...", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                "[Ctrl+R] Create strategy",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
        };
        lines.push(Line::from(control));
    }

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", plan.title))
                .style(Style::default().fg(Color::Magenta)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
