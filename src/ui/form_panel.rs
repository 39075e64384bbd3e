use crate::app::state::*;
use crate::form::FieldName;
use crate::ui::layout::compute_form_layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const MASK: char = '•';

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Sign Up ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(2))
        .style(Theme::form_panel());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = compute_form_layout(inner);

    frame.render_widget(
        Paragraph::new("Please fill out this form to register").style(Theme::subtitle()),
        rows.subtitle,
    );

    for (i, name) in FieldName::ALL.into_iter().enumerate() {
        render_field(frame, rows.fields[i], state, name);
        if let Some(message) = state.controller.form().errors().get(name) {
            frame.render_widget(
                Paragraph::new(message).style(Theme::field_error()),
                rows.errors[i],
            );
        }
    }

    frame.render_widget(
        Paragraph::new("Submit ⏎")
            .alignment(Alignment::Center)
            .style(Theme::button()),
        rows.button,
    );
}

fn render_field(frame: &mut Frame, area: Rect, state: &AppState, name: FieldName) {
    let focused = state.focus == name;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(Theme::input_text());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = state.controller.form().value(name);
    let shown = display_value(name, value);

    if shown.is_empty() {
        frame.render_widget(
            Paragraph::new(name.label()).style(Theme::placeholder()),
            inner,
        );
    } else {
        frame.render_widget(Paragraph::new(shown.as_str()).style(Theme::input_text()), inner);
    }

    if focused && inner.width > 0 {
        frame.set_cursor_position((cursor_column(inner, shown.width()), inner.y));
    }
}

/// Column just past the text, pinned to the last cell of `inner`.
fn cursor_column(inner: Rect, text_width: usize) -> u16 {
    let width = u16::try_from(text_width).unwrap_or(u16::MAX);
    inner
        .x
        .saturating_add(width)
        .min(inner.right().saturating_sub(1))
}

/// Masks secret fields, one bullet per character.
fn display_value(name: FieldName, value: &str) -> String {
    if name.is_secret() {
        value.chars().map(|_| MASK).collect()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passwords_are_masked() {
        assert_eq!(display_value(FieldName::Password, "secret"), "••••••");
        assert_eq!(display_value(FieldName::ConfirmPassword, "é1"), "••");
        assert_eq!(display_value(FieldName::Email, "a@b.c"), "a@b.c");
    }

    #[test]
    fn test_cursor_stays_inside_the_input() {
        let inner = Rect::new(10, 3, 20, 1);
        assert_eq!(cursor_column(inner, 0), 10);
        assert_eq!(cursor_column(inner, 5), 15);
        assert_eq!(cursor_column(inner, 40), 29);
        assert_eq!(cursor_column(inner, 65_530), 29);
        assert_eq!(cursor_column(inner, 1 << 20), 29);

        let far_right = Rect::new(u16::MAX - 4, 0, 4, 1);
        assert_eq!(cursor_column(far_right, 100), u16::MAX - 1);
    }
}
