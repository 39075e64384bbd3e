use crate::form::RevealTicket;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The reveal timer for this activation ran out
    RevealExpired(RevealTicket),
}
