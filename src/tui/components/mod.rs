//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name, backend URL, status, working indicator
//! - `Notification`: blocking error overlay
//!
//! ### Stateful Components
//!
//! - `InputBox`: the shared add/edit line (owns buffer and cursor)
//! - `TodoList`, `OwnerList`: transient wrappers over a persistent
//!   `SelectionState` kept in `TuiState`
//!
//! Components receive external data as props (struct fields or constructor
//! arguments), never by reaching into `App` themselves.

mod title_bar;
pub use title_bar::TitleBar;

pub mod input_box;
pub use input_box::{InputBox, InputEvent};
pub mod notification;
pub use notification::Notification;
pub mod owner_list;
pub use owner_list::OwnerList;
pub mod selection;
pub use selection::SelectionState;
pub mod todo_list;
pub use todo_list::TodoList;
