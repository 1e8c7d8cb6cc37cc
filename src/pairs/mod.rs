pub mod board;
pub mod catalog;
pub mod config;
pub mod input;
pub mod navigation;
pub mod session;
pub mod state;
pub mod timers;
pub mod tui;
pub mod view;

pub use config::PairsConfig;
pub use tui::run_with_config;
