use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::listing::{owner_rows, todo_rows};
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{Notification, OwnerList, TitleBar, TodoList};
use crate::tui::{Focus, TuiState};

/// Screen regions, top to bottom.
struct Areas {
    title: Rect,
    input: Rect,
    todos: Rect,
    owners: Rect,
    help: Rect,
}

fn layout(area: Rect) -> Areas {
    use Constraint::{Length, Min, Percentage};
    let [title, input, body, help] =
        Layout::vertical([Length(1), Length(3), Min(0), Length(1)]).areas(area);
    let [todos, owners] = Layout::horizontal([Percentage(60), Percentage(40)]).areas(body);
    Areas {
        title,
        input,
        todos,
        owners,
        help,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let full = frame.area();
    let areas = layout(full);

    TitleBar::new(
        app.base_url.clone(),
        app.status_message.clone(),
        app.is_loading(),
    )
    .render(frame, areas.title);

    TodoList::new(
        todo_rows(&app.todos, app.clock),
        app.edit.target_id(),
        tui.focus == Focus::Todos,
        &mut tui.todo_selection,
    )
    .render(frame, areas.todos);

    OwnerList::new(
        owner_rows(&app.owners),
        tui.focus == Focus::Owners,
        &mut tui.owner_selection,
    )
    .render(frame, areas.owners);

    let help = Line::from(Span::styled(
        help_text(tui.focus, app.edit.is_editing()),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(help, areas.help);

    // Input last so its cursor position wins.
    tui.input_box.render(frame, areas.input);

    if let Some(message) = app.notification() {
        Notification::new(message).render(frame, full);
    }
}

fn help_text(focus: Focus, editing: bool) -> &'static str {
    match (focus, editing) {
        (Focus::Input, false) => "Enter submit · Esc lists · Tab switch pane · Ctrl+C quit",
        (Focus::Input, true) => "Enter update · Esc cancel edit · Tab switch pane · Ctrl+C quit",
        (Focus::Todos, false) => "↑↓ select · e edit · d delete · r refresh · Tab switch · q quit",
        (Focus::Todos, true) => "↑↓ select · e edit · c cancel edit · r refresh · Tab switch · q quit",
        (Focus::Owners, _) => "↑↓ select · d delete · r refresh · Esc input · Tab switch · q quit",
    }
}
