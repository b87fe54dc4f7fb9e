//! # Edit Session
//!
//! The shared input line is used both to add a todo and to rewrite an
//! existing one. Which of the two a submit means is the session's mode:
//!
//! ```text
//!          edit row             edit other row
//!   ADD ────────────▶ EDIT ◀───────────────┐
//!    ▲                  │ └────────────────┘
//!    └──────────────────┘
//!    update ok / cancel / todo deleted
//! ```
//!
//! The target id lives inside `EditMode::Edit`, so "a target exists exactly
//! when editing" cannot be violated.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Add,
    Edit { target_id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    pub mode: EditMode,
    pub input_text: String,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Edit { .. })
    }

    pub fn target_id(&self) -> Option<&str> {
        match &self.mode {
            EditMode::Edit { target_id } => Some(target_id),
            EditMode::Add => None,
        }
    }

    /// Switches to editing `id`, replacing whatever was typed.
    pub fn begin_edit(&mut self, id: &str, current_text: &str) {
        self.mode = EditMode::Edit {
            target_id: id.to_string(),
        };
        self.input_text = current_text.to_string();
    }

    /// Back to ADD with an empty line.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn label(&self) -> &'static str {
        match self.mode {
            EditMode::Add => "ADD",
            EditMode::Edit { .. } => "EDIT",
        }
    }
}
