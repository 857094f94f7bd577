// Terminal dashboard over the goal records dataset.

pub mod app;
pub mod tui;
