//! Controller layer: UI events, command parsing, and applying commands to the table.

pub mod events;
pub mod orchestration;
