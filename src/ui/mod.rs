mod card;
mod form_panel;
mod layout;
mod nav_bar;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    nav_bar::render(frame, app_layout.nav_bar);
    card::render(frame, app_layout.card, state);
    form_panel::render(frame, app_layout.form, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Controller;
    use crate::form::reveal::testing::RecordingScheduler;
    use crate::form::state::FieldSet;
    use crate::form::{FieldName, RevealScheduler, SubmissionController};
    use crate::storage::{MemoryStorage, Storage};
    use ratatui::backend::TestBackend;

    fn state() -> AppState {
        let controller: Controller = SubmissionController::restore(
            Box::new(MemoryStorage::new()) as Box<dyn Storage>,
            Box::new(RecordingScheduler::default()) as Box<dyn RevealScheduler>,
        );
        AppState::new(controller)
    }

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_initial_screen() {
        let screen = draw(&state());
        assert!(screen.contains("SECE"));
        assert!(screen.contains("Sign Up"));
        assert!(screen.contains("Please fill out this form to register"));
        assert!(screen.contains("Confirm Password"));
        assert!(screen.contains("Sign up to flip the card"));
    }

    #[test]
    fn test_errors_and_reveal_are_drawn() {
        let mut state = state();
        state.controller.submit().unwrap_err();
        let screen = draw(&state);
        assert!(screen.contains("Username is required"));
        assert!(screen.contains("Email is required"));

        let ann = FieldSet {
            username: "ann".into(),
            email: "ann@x.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        };
        for name in FieldName::ALL {
            state.controller.set_field(name, ann.get(name).to_string());
        }
        state.controller.submit().unwrap();
        let screen = draw(&state);
        assert!(screen.contains("Welcome ann!"));
        assert!(screen.contains("[REVEALED]"));
        assert!(!screen.contains("Username is required"));
    }
}
