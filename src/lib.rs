pub mod app;
pub mod client;
pub mod console;
pub mod dashboard;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod models;
pub mod schedule;
pub mod state;
pub mod stats;
pub mod storage;
pub mod terminal;
pub mod ui;
pub mod view;

#[cfg(test)]
mod testing;

pub use app::router;
pub use client::{HttpRatingApi, RatingApi};
pub use dashboard::Dashboard;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
pub use terminal::RatingTerminal;
