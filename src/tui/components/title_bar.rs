//! # TitleBar Component
//!
//! Top status bar: app name, backend URL, last status, and a working
//! indicator while requests are in flight.
//!
//! Stateless: all data arrives as props, so the bar is trivial to test.
//!
//! ## Conditional Formatting
//!
//! 1. **Working**: `"Todo App (http://localhost:3000) | Todo added | working..."`
//! 2. **Status message**: `"Todo App (http://localhost:3000) | Todo added"`
//! 3. **Default**: `"Todo App (http://localhost:3000)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component.
pub struct TitleBar {
    /// Backend base URL
    pub base_url: String,
    /// Status message (e.g., "Todo added", "Request failed")
    pub status_message: String,
    /// Whether any request is still in flight
    pub working: bool,
}

impl TitleBar {
    pub fn new(base_url: String, status_message: String, working: bool) -> Self {
        Self {
            base_url,
            status_message,
            working,
        }
    }

    fn text(&self) -> String {
        if self.working {
            format!(
                "Todo App ({}) | {} | working...",
                self.base_url, self.status_message
            )
        } else if self.status_message.is_empty() {
            format!("Todo App ({})", self.base_url)
        } else {
            format!("Todo App ({}) | {}", self.base_url, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
