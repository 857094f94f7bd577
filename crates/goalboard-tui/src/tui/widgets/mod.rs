// TUI widget modules for each dashboard zone.

pub mod bar_chart;
pub mod help_bar;
pub mod panel;
pub mod quit_confirm;
pub mod sidebar;
pub mod status_bar;
