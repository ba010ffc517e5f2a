use super::sort_label;
use crate::app::AppState;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    if let Some((message, time)) = &state.status_message
        && time.elapsed().as_secs() <= 3
    {
        render_status_message(f, message, area);
        return;
    }

    let left_content = format!(
        " {} | {} items | {}",
        state.mode,
        state.total_items(),
        sort_label(state.store.sort_order())
    );
    let nav_hint = "? help  q quit";
    let version_text = format!("v{VERSION}");

    // Format: "{left_content} {padding} {nav_hint}  {version_text} "
    let padding = area.width.saturating_sub(
        left_content.len() as u16 + nav_hint.len() as u16 + version_text.len() as u16 + 4,
    );

    let status_line = format!(
        "{} {:>padding$} {}  {} ",
        left_content,
        "",
        nav_hint,
        version_text,
        padding = padding as usize
    );

    let style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));
    f.render_widget(status, area);
}

fn render_status_message(f: &mut Frame, message: &str, area: Rect) {
    let display_message = format!(" {message} ");

    let style = Style::default()
        .fg(ratatui::style::Color::White)
        .bg(ratatui::style::Color::Rgb(0, 100, 0))
        .add_modifier(Modifier::BOLD);

    let padding = area.width.saturating_sub(display_message.len() as u16);
    let status_line = format!(
        "{}{:padding$}",
        display_message,
        "",
        padding = padding as usize
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));
    f.render_widget(status, area);
}
