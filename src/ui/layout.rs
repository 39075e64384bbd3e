use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub nav_bar: Rect,
    pub card: Rect,
    pub form: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: nav bar | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let nav_bar = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    // Horizontal: flip card | gap | sign-up form
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(2)
        .constraints([
            Constraint::Percentage(55), // Card
            Constraint::Min(36),        // Form
        ])
        .split(content);

    AppLayout {
        nav_bar,
        card: h_chunks[0],
        form: h_chunks[1],
        status_bar,
    }
}

/// Rows inside the form panel: subtitle, four inputs with an error line each,
/// and the submit button.
pub struct FormLayout {
    pub subtitle: Rect,
    pub fields: [Rect; 4],
    pub errors: [Rect; 4],
    pub button: Rect,
}

pub fn compute_form_layout(area: Rect) -> FormLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Subtitle
            Constraint::Length(3), // Username
            Constraint::Length(1),
            Constraint::Length(3), // Email
            Constraint::Length(1),
            Constraint::Length(3), // Password
            Constraint::Length(1),
            Constraint::Length(3), // Confirm password
            Constraint::Length(1),
            Constraint::Length(1), // Submit
            Constraint::Min(0),
        ])
        .split(area);

    FormLayout {
        subtitle: rows[0],
        fields: [rows[1], rows[3], rows[5], rows[7]],
        errors: [rows[2], rows[4], rows[6], rows[8]],
        button: rows[9],
    }
}
