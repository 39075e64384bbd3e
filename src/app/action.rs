use crate::form::FieldName;

/// Intents produced by input handling and applied to the form controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetField { field: FieldName, value: String },
    Submit,
    Quit,
}
