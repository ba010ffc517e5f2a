pub mod item_list;
pub mod status_bar;

use crate::app::state::Route;
use crate::app::AppState;
use item_tui::item::SortOrder;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Active screen
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    match state.route {
        Route::Items => item_list::render(f, state, chunks[0]),
        Route::About => render_about_screen(f, state, chunks[0]),
    }

    status_bar::render(f, state, chunks[1]);

    if state.show_help {
        render_help_overlay(f, state);
    }
}

fn render_about_screen(f: &mut Frame, state: &AppState, area: Rect) {
    let text_style = Style::default().fg(state.theme.foreground);
    let dim_style = Style::default().fg(state.theme.dim);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  item-tui", text_style.add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(
            "  A small terminal tracker for short text items.",
            text_style,
        )),
        Line::from(Span::styled(
            "  Items are sorted by creation date and persist across sessions.",
            text_style,
        )),
        Line::from(""),
        Line::from(Span::styled("  Press Tab to return to the list.", dim_style)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" About ")
        .style(Style::default().bg(state.theme.background));

    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(state.theme.foreground);
    let section_style = Style::default().fg(state.theme.accent).add_modifier(Modifier::BOLD);

    let entries: &[(&str, &str)] = &[
        ("a / i", "Add an item (insert mode)"),
        ("Enter", "Submit the draft"),
        ("Esc", "Leave insert mode"),
        ("s", "Toggle sort order"),
        ("h / ←", "Previous page"),
        ("l / →", "Next page"),
        ("g / G", "First / last page"),
        ("+ / -", "More / fewer items per page"),
        ("Tab", "Switch between list and About"),
        ("?", "Toggle this help"),
        ("q", "Quit"),
    ];

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("  Keys", section_style)),
        Line::from(""),
    ];
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("    {key:<8}"), key_style),
            Span::styled(*desc, desc_style),
        ]));
    }

    let area = centered_rect(50, 60, f.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(state.theme.background));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// UI label for the active sort direction.
pub fn sort_label(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Ascending => "Oldest First",
        SortOrder::Descending => "Newest First",
    }
}
