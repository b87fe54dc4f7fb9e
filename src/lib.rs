//! todo-tui library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which clock creation times are shown in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockZone {
    /// Wall-clock time in the offset the backend wrote the timestamp with.
    #[default]
    Source,
    /// Converted to this machine's local time zone.
    Local,
}
