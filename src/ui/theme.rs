use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BRAND_BLUE: Color = Color::Rgb(0, 123, 255);
    pub const BUTTON_BLUE: Color = Color::Rgb(0, 86, 179);
    pub const DEEP_BLUE: Color = Color::Rgb(0, 0, 139);
    pub const SKY_BLUE: Color = Color::Rgb(161, 196, 253);
    pub const TEXT_MUTED: Color = Color::Rgb(170, 180, 200);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::SKY_BLUE)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn form_panel() -> Style {
        Style::default().fg(Color::White).bg(Self::BRAND_BLUE)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::Black).bg(Color::White)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Color::Gray).bg(Color::White)
    }

    pub fn field_error() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::BUTTON_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_front() -> Style {
        Style::default().fg(Self::SKY_BLUE).bg(Self::DEEP_BLUE)
    }

    pub fn card_back() -> Style {
        Style::default().fg(Color::White).bg(Self::BUTTON_BLUE)
    }

    pub fn card_heading() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn logo() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn nav_link() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Color::Yellow).bg(Color::DarkGray)
    }
}
