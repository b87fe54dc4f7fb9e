//! Row selection shared by the todo and owner lists.

use ratatui::widgets::ListState;

/// Persistent selection for one list. Lives in `TuiState`; the lists it
/// points into are replaced on every fetch, so it is re-clamped each frame.
#[derive(Debug, Default)]
pub struct SelectionState {
    pub list_state: ListState,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Keep the selection on a real row after the list changed length.
    pub fn clamp(&mut self, len: usize) {
        let selected = match (len, self.list_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.list_state.select(selected);
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(i));
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self.list_state.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.list_state.select(Some(i));
    }
}
