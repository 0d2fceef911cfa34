//! Bridge between the UI loop and the background fetch worker.

pub mod commands;
pub mod runtime;
