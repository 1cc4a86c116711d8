//! Reusable UI components (file browser, layout helpers)

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::app::App;

pub fn render_file_browser(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(70, 70, area);
    let parent = app.current_dir.parent();

    let filtered = app.filtered_file_browser_items();
    let items: Vec<ListItem> = filtered
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let is_selected = i == app.file_browser_selected;
            let is_dir = path.is_dir();
            let is_parent = parent.map(|p| p == path.as_path()).unwrap_or(false);

            let name = if is_parent {
                "../".to_string()
            } else {
                let base = path.file_name().and_then(|n| n.to_str()).unwrap_or("?");
                if is_dir {
                    format!("{}/", base)
                } else {
                    base.to_string()
                }
            };

            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if is_dir {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::raw(if is_selected { "\u{25b6} " } else { "  " }),
                Span::styled(name, style),
            ]))
        })
        .collect();

    let title = if app.file_browser_search.is_empty() {
        format!(" Attach File: {} ", app.current_dir.display())
    } else {
        format!(" Attach File [search: {}] ", app.file_browser_search)
    };

    // Keep the selection inside the visible window
    let visible = (popup_area.height.saturating_sub(2)) as usize;
    let scroll_offset = if visible > 0 && app.file_browser_selected >= visible {
        app.file_browser_selected.saturating_sub(visible - 1)
    } else {
        0
    };
    let items: Vec<ListItem> = items.into_iter().skip(scroll_offset).take(visible).collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(title)
            .style(Style::default().bg(Color::Black)),
    );

    f.render_widget(ratatui::widgets::Clear, popup_area);
    f.render_widget(list, popup_area);
}

/// Scroll offset that keeps the newest line visible, minus `lines_up`
/// of user scrollback. Saturates at `u16::MAX` for very long transcripts
/// rather than wrapping the anchor back to the top.
pub fn follow_bottom_offset(total_lines: usize, viewport_height: u16, lines_up: u16) -> u16 {
    let total = u16::try_from(total_lines).unwrap_or(u16::MAX);
    total
        .saturating_sub(viewport_height)
        .saturating_sub(lines_up)
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
