pub mod event_handler;
pub mod runner;
pub mod terminal_manager;
pub mod ui_loop;

pub use runner::run_draw_screen;
