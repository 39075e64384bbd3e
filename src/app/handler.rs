use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::form::FieldName;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::RevealExpired(ticket) => {
            if state.controller.expire(ticket) {
                state.dirty = true;
            }
            vec![]
        }
    }
}

/// Feed one intent into the controller and reflect the outcome in the
/// status bar and focus.
pub fn apply_action(state: &mut AppState, action: Action) {
    match action {
        Action::SetField { field, value } => {
            state.controller.set_field(field, value);
            state.dirty = true;
        }
        Action::Submit => match state.controller.submit() {
            Ok(record) => {
                state.focus = FieldName::Username;
                state.info_message(format!("Welcome {}! Registration saved.", record.username()));
            }
            Err(err) => {
                if let Some(first) = err.errors().first() {
                    state.focus = first;
                }
                let n = err.errors().len();
                state.error_message(format!(
                    "Please fix {} field{}",
                    n,
                    if n == 1 { "" } else { "s" }
                ));
            }
        },
        Action::Quit => {
            state.should_quit = true;
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Esc => vec![Action::Quit],
        KeyCode::Enter => vec![Action::Submit],
        KeyCode::Tab | KeyCode::Down => {
            state.focus_next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus_prev();
            vec![]
        }
        KeyCode::Backspace => {
            let mut value = state.controller.form().value(state.focus).to_string();
            if value.pop().is_none() {
                return vec![];
            }
            vec![Action::SetField {
                field: state.focus,
                value,
            }]
        }
        KeyCode::Char(c)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut value = state.controller.form().value(state.focus).to_string();
            value.push(c);
            vec![Action::SetField {
                field: state.focus,
                value,
            }]
        }
        other => {
            debug!(key = ?other, "unbound key");
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::controller::STORAGE_KEY;
    use crate::form::reveal::testing::RecordingScheduler;
    use crate::form::{RevealTicket, SubmissionController};
    use crate::storage::MemoryStorage;

    fn new_state(storage: MemoryStorage) -> AppState {
        let controller = SubmissionController::restore(
            Box::new(storage) as Box<dyn crate::storage::Storage>,
            Box::new(RecordingScheduler::default()) as Box<dyn crate::form::RevealScheduler>,
        );
        AppState::new(controller)
    }

    fn press(state: &mut AppState, code: KeyCode) {
        press_with(state, code, KeyModifiers::NONE);
    }

    fn press_with(state: &mut AppState, code: KeyCode, modifiers: KeyModifiers) {
        let event = AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, modifiers)));
        for action in handle_event(state, event) {
            apply_action(state, action);
        }
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut state = new_state(MemoryStorage::new());
        type_text(&mut state, "anx");
        press(&mut state, KeyCode::Backspace);
        type_text(&mut state, "n");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "ann@x.com");

        let form = state.controller.form();
        assert_eq!(form.value(FieldName::Username), "ann");
        assert_eq!(form.value(FieldName::Email), "ann@x.com");
        assert_eq!(state.focus, FieldName::Email);
    }

    #[test]
    fn test_backspace_on_empty_field_emits_nothing() {
        let mut state = new_state(MemoryStorage::new());
        let event = AppEvent::Terminal(CEvent::Key(KeyEvent::from(KeyCode::Backspace)));
        assert!(handle_event(&mut state, event).is_empty());
    }

    #[test]
    fn test_full_registration_flow() {
        let storage = MemoryStorage::new();
        let mut state = new_state(storage.clone());
        for (i, text) in ["ann", "ann@x.com", "secret1", "secret1"].iter().enumerate() {
            if i > 0 {
                press(&mut state, KeyCode::Down);
            }
            type_text(&mut state, text);
        }

        press(&mut state, KeyCode::Enter);

        assert!(state.controller.reveal().is_active());
        assert_eq!(state.controller.form().value(FieldName::Username), "");
        assert_eq!(state.focus, FieldName::Username);
        assert!(storage.get(STORAGE_KEY).is_some());
        let status = state.status_message.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Info);

        let actions = handle_event(&mut state, AppEvent::RevealExpired(RevealTicket(1)));
        assert!(actions.is_empty());
        assert!(!state.controller.reveal().is_active());
        assert_eq!(state.status_line(), status.text);
    }

    #[test]
    fn test_failed_submit_focuses_first_error() {
        let mut state = new_state(MemoryStorage::new());
        type_text(&mut state, "ann");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "bad");
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.focus, FieldName::Email);
        let status = state.status_message.as_ref().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "Please fix 2 fields");
        assert_eq!(state.controller.form().value(FieldName::Email), "bad");

        type_text(&mut state, "@x.com");
        assert_eq!(state.controller.form().errors().get(FieldName::Email), None);
        assert!(state.controller.form().errors().get(FieldName::Password).is_some());
    }

    #[test]
    fn test_quit_keys() {
        let mut state = new_state(MemoryStorage::new());
        press_with(&mut state, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(state.should_quit);
        assert_eq!(state.controller.form().value(FieldName::Username), "");

        let mut state = new_state(MemoryStorage::new());
        press(&mut state, KeyCode::Esc);
        assert!(state.should_quit);
    }

    #[test]
    fn test_shift_tab_moves_back() {
        let mut state = new_state(MemoryStorage::new());
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.focus, FieldName::ConfirmPassword);
        press(&mut state, KeyCode::Up);
        assert_eq!(state.focus, FieldName::Password);
    }
}
