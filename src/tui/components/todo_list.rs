//! # TodoList Component
//!
//! Renders the sorted todos as `(n)  date  time  text` rows.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SelectionState` lives in `TuiState`
//! - `TodoList` is created each frame with borrowed state and rows
//!
//! The delete hint is only shown in ADD mode, matching the reducer, which
//! ignores todo deletes while an edit is in progress.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph};

use crate::core::listing::TodoRow;
use crate::tui::component::Component;
use crate::tui::components::selection::SelectionState;

pub struct TodoList<'a> {
    pub rows: Vec<TodoRow<'a>>,
    /// Id of the todo the input line is editing, if any.
    pub editing_id: Option<&'a str>,
    pub focused: bool,
    state: &'a mut SelectionState,
}

impl<'a> TodoList<'a> {
    pub fn new(
        rows: Vec<TodoRow<'a>>,
        editing_id: Option<&'a str>,
        focused: bool,
        state: &'a mut SelectionState,
    ) -> Self {
        Self {
            rows,
            editing_id,
            focused,
            state,
        }
    }

    fn hint(&self) -> &'static str {
        match (self.focused, self.editing_id.is_some()) {
            (false, _) => "",
            (true, false) => " e Edit  d Delete ",
            (true, true) => " e Edit other  c Cancel ",
        }
    }

    fn row_line(&self, row: &TodoRow<'_>) -> Line<'static> {
        let is_target = self.editing_id == Some(row.id);
        let text_style = if is_target {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut spans = vec![
            Span::styled(
                format!("({}) ", row.index),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(format!("{:>8} ", row.stamp.date), Style::default().fg(Color::Cyan)),
            Span::styled(format!("{:>5}  ", row.stamp.time), Style::default().fg(Color::Cyan)),
            Span::styled(row.text.to_string(), text_style),
        ];
        if is_target {
            spans.push(Span::styled(" ✎ editing", Style::default().fg(Color::Yellow)));
        }
        Line::from(spans)
    }
}

impl Component for TodoList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_style(border_style)
            .title(" Todo List ")
            .title_bottom(Line::from(self.hint()).centered());

        if self.rows.is_empty() {
            let empty = Paragraph::new("No todos yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.clamp(self.rows.len());

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| ListItem::new(self.row_line(row)))
            .collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
