use super::sort_label;
use crate::app::mode::Mode;
use crate::app::AppState;
use chrono::Local;
use item_tui::pagination::{page_number_sequence, range_summary, PageMarker};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, state: &mut AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Draft input
            Constraint::Min(1),    // Item list
            Constraint::Length(2), // Pagination footer
        ])
        .split(area);

    render_input(f, state, chunks[0]);
    render_list(f, state, chunks[1]);
    render_pagination(f, state, chunks[2]);
}

fn render_input(f: &mut Frame, state: &AppState, area: Rect) {
    let border_style = if state.mode == Mode::Insert {
        Style::default().fg(state.theme.accent)
    } else {
        Style::default().fg(state.theme.dim)
    };

    let title = if state.mode == Mode::Insert {
        " New Item (Enter to add, Esc to cancel) "
    } else {
        " New Item (press 'a' to type) "
    };

    let input = Paragraph::new(state.draft_text.as_str())
        .style(Style::default().fg(state.theme.foreground))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );
    f.render_widget(input, area);

    if state.mode == Mode::Insert {
        let cursor_offset = state.draft_text[..state.draft_cursor].chars().count() as u16;
        let max_x = area.width.saturating_sub(2);
        f.set_cursor_position((area.x + 1 + cursor_offset.min(max_x), area.y + 1));
    }
}

fn render_list(f: &mut Frame, state: &mut AppState, area: Rect) {
    let title = format!(
        " Items — {} ",
        sort_label(state.store.sort_order())
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().bg(state.theme.background));

    if state.total_items() == 0 {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No items yet. Press 'a' to add one.",
            Style::default().fg(state.theme.dim),
        )))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let text_style = Style::default().fg(state.theme.foreground);
    let date_style = Style::default().fg(state.theme.dim);

    let rows: Vec<ListItem> = state
        .current_items()
        .iter()
        .map(|item| {
            let date = item
                .created_date
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string();
            ListItem::new(Line::from(vec![
                Span::styled(item.text.clone(), text_style),
                Span::raw("  "),
                Span::styled(date, date_style),
            ]))
        })
        .collect();

    let list = List::new(rows).block(block);
    f.render_stateful_widget(list, area, &mut state.list_state);
}

fn render_pagination(f: &mut Frame, state: &AppState, area: Rect) {
    if state.total_items() == 0 {
        return;
    }

    let dim = Style::default().fg(state.theme.dim);
    let current = Style::default()
        .fg(state.theme.accent)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled("‹ ", dim)];
    for marker in page_number_sequence(state.current_page, state.total_pages()) {
        match marker {
            PageMarker::Number(page) if page == state.current_page => {
                spans.push(Span::styled(format!("[{page}]"), current));
            }
            PageMarker::Number(page) => {
                spans.push(Span::styled(format!(" {page} "), Style::default().fg(state.theme.foreground)));
            }
            PageMarker::Ellipsis => {
                spans.push(Span::styled(" … ", dim));
            }
        }
    }
    spans.push(Span::styled(" ›", dim));

    let (start, end) = range_summary(state.current_page, state.items_per_page, state.total_items());
    let summary = format!(
        "Showing {start} - {end} of {} items  ·  {} per page",
        state.total_items(),
        state.items_per_page
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(summary, dim))).alignment(Alignment::Center),
        chunks[1],
    );
}
