use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const LOGO: &str = "SECE";
const LINKS: [&str; 4] = ["Home", "Explore", "Create", "Share"];

pub fn render(frame: &mut Frame, area: Rect) {
    let links: Vec<Span> = LINKS
        .iter()
        .flat_map(|link| [Span::styled(*link, Theme::nav_link()), Span::raw("   ")])
        .collect();
    let links_width: usize = links.iter().map(|s| s.width()).sum();

    let logo = format!(" {}", LOGO);
    let gap = (area.width as usize).saturating_sub(logo.len() + links_width);

    let mut parts = vec![Span::styled(logo, Theme::logo()), Span::raw(" ".repeat(gap))];
    parts.extend(links);

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
