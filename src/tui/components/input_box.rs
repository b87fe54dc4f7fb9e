//! # InputBox Component
//!
//! The single input line shared by "add" and "edit".
//!
//! ## State Management
//!
//! The buffer and cursor are internal state, but the authoritative text is
//! `App.edit.input_text`: every edit emits `InputEvent::Changed` so the core
//! sees it, and `sync()` pulls the text back whenever the core replaced it
//! (edit affordance, clear after submit, cancel).
//!
//! `editing` and `focused` are props from the parent.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Shown in the empty line.
const PLACEHOLDER: &str = "Add a new task";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Buffer now holds this text
    Changed(String),
    /// Enter pressed
    Submit,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether the session is in EDIT mode (Prop)
    pub editing: bool,
    /// Whether keystrokes go here (Prop)
    pub focused: bool,
    /// Cursor as byte offset in `buffer`
    cursor: usize,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            editing: false,
            focused: true,
            cursor: 0,
        }
    }

    /// Adopt text set by the core. No-op when nothing changed, so the cursor
    /// stays put while the user types.
    pub fn sync(&mut self, text: &str) {
        if self.buffer != text {
            self.buffer = text.to_string();
            self.cursor = self.buffer.len();
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .chars()
            .next_back()
            .map_or(self.cursor, |c| self.cursor - c.len_utf8())
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map_or(self.cursor, |c| self.cursor + c.len_utf8())
    }

    fn changed(&self) -> Option<InputEvent> {
        Some(InputEvent::Changed(self.buffer.clone()))
    }

    /// Visible tail of the buffer and the cursor column within it.
    ///
    /// Scrolls horizontally just enough that the cursor stays inside `width`
    /// columns.
    fn viewport(&self, width: usize) -> (&str, u16) {
        let before = &self.buffer[..self.cursor];
        let mut col = before.width();
        let mut start = 0;
        for c in before.chars() {
            if col < width {
                break;
            }
            col -= c.width().unwrap_or(0);
            start += c.len_utf8();
        }
        (&self.buffer[start..], col as u16)
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (title, hint) = if self.editing {
            (" Edit task ", " Enter Update · Esc Cancel ")
        } else {
            (" New task ", " Enter Submit ")
        };

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title)
            .title_bottom(Line::from(hint).right_aligned());

        let inner_width = area.width.saturating_sub(2).max(1) as usize;
        let (visible, cursor_col) = self.viewport(inner_width);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(visible.to_string()).style(Style::default().fg(Color::Green))
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let x = area.x + 1 + cursor_col.min(area.width.saturating_sub(3));
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single line: pasted newlines become spaces.
                let flat: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.buffer.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = self.prev_boundary();
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = self.next_boundary();
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary();
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}
