use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const HINTS: &str = " Tab/↑↓ move · Enter submit · Esc quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let style = match state.status_message.as_ref().map(|m| &m.kind) {
        Some(StatusKind::Error) => Theme::status_error(),
        _ => Theme::status_bar(),
    };

    let mut parts: Vec<Span> = vec![Span::styled(format!(" {} ", state.status_line()), style)];

    if state.controller.reveal().is_active() {
        parts.push(Span::styled(
            " [REVEALED] ",
            Style::default().fg(Color::Cyan).bg(Color::DarkGray),
        ));
    }

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let hints_width = Span::raw(HINTS).width();
    let remaining = (area.width as usize).saturating_sub(used + hints_width);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(HINTS, Theme::status_bar()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
