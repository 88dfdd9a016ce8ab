//! Command handlers, one module per resource area.

pub mod config_cmd;
pub mod events;
pub mod tags;
pub mod util;
