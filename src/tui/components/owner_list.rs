//! # OwnerList Component
//!
//! The owner roster in server order. Rows can only be deleted, never edited.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph};

use crate::core::listing::OwnerRow;
use crate::tui::component::Component;
use crate::tui::components::selection::SelectionState;

pub struct OwnerList<'a> {
    pub rows: Vec<OwnerRow<'a>>,
    pub focused: bool,
    state: &'a mut SelectionState,
}

impl<'a> OwnerList<'a> {
    pub fn new(rows: Vec<OwnerRow<'a>>, focused: bool, state: &'a mut SelectionState) -> Self {
        Self {
            rows,
            focused,
            state,
        }
    }
}

fn owner_item(row: &OwnerRow<'_>) -> ListItem<'static> {
    let label = Style::default().fg(Color::DarkGray);
    let owner = row.owner;
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(format!("({}) ", row.index), label),
            Span::styled("ID: ", label),
            Span::raw(owner.id.clone()),
        ]),
        Line::from(vec![
            Span::styled("    NAME: ", label),
            Span::styled(owner.name.clone(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("    COURSE: ", label),
            Span::raw(owner.course_id.clone()),
            Span::styled("  SECTION: ", label),
            Span::raw(owner.section.clone()),
        ]),
    ])
}

impl Component for OwnerList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let hint = if self.focused { " d Delete " } else { "" };
        let block = Block::bordered()
            .border_style(border_style)
            .title(" Owner Info ")
            .title_bottom(Line::from(hint).centered());

        if self.rows.is_empty() {
            let empty = Paragraph::new("No owners.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.clamp(self.rows.len());

        let items: Vec<ListItem> = self.rows.iter().map(owner_item).collect();
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
