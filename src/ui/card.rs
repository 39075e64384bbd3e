//! The flip card: artwork on the front, the last registration on the back.
//!
//! The back is shown only while the reveal is active; once it expires the
//! card turns back over even though the record is kept.

use crate::app::state::AppState;
use crate::form::SubmissionRecord;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

const ARTWORK: [&str; 7] = [
    r"    .-----------------------.    ",
    r"   /  ~  ~   create   ~  ~   \   ",
    r"  |   .--.    .--.    .--.    |  ",
    r"  |  ( () )  ( () )  ( () )   |  ",
    r"  |   '--'    '--'    '--'    |  ",
    r"   \  ~  ~   explore  ~  ~   /   ",
    r"    '-----------------------'    ",
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let reveal = state.controller.reveal();
    let (lines, style) = if reveal.is_active() {
        (back_lines(reveal.record()), Theme::card_back())
    } else {
        (front_lines(), Theme::card_front())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused())
        .padding(Padding::uniform(1))
        .style(style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Vertically centre the content
    let top = inner.height.saturating_sub(lines.len() as u16) / 2;
    let body = Rect {
        y: inner.y + top,
        height: inner.height - top,
        ..inner
    };
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, body);
}

fn front_lines() -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = ARTWORK.iter().map(|row| Line::from(*row)).collect();
    lines.push(Line::default());
    lines.push(Line::styled(
        "Sign up to flip the card",
        Style::default().add_modifier(Modifier::ITALIC),
    ));
    lines
}

fn back_lines(record: Option<&SubmissionRecord>) -> Vec<Line<'static>> {
    let Some(record) = record else {
        return vec![Line::from("No data submitted yet.")];
    };
    vec![
        Line::styled(format!("Welcome {}!", record.username()), Theme::card_heading()),
        Line::default(),
        Line::from(vec![
            Span::styled("Email: ", Theme::card_heading()),
            Span::raw(record.email().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Password: ", Theme::card_heading()),
            Span::raw(record.password().to_string()),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::state::FieldSet;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_back_without_record() {
        assert_eq!(text(&back_lines(None)), "No data submitted yet.");
    }

    #[test]
    fn test_back_shows_record() {
        let record = SubmissionRecord::new(FieldSet {
            username: "ann".into(),
            email: "ann@x.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        });
        let rendered = text(&back_lines(Some(&record)));
        assert!(rendered.contains("Welcome ann!"));
        assert!(rendered.contains("Email: ann@x.com"));
        assert!(rendered.contains("Password: secret1"));
    }
}
