//! # Core Application Logic
//!
//! This module contains the client's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. I/O only via    │
//!                    │  the TodoBackend trait. │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │    API     │
//!           │  Adapter   │              │  (reqwest) │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`edit`]: The ADD/EDIT session behind the input line
//! - [`listing`]: Todo ordering and date/time formatting
//! - [`sync`]: Turning effects into backend calls
//! - [`config`]: Layered settings

pub mod action;
pub mod config;
pub mod edit;
pub mod listing;
pub mod state;
pub mod sync;
