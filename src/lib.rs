pub mod app;
pub mod config;
pub mod credential;
pub mod errors;
pub mod extra;
pub mod handlers;
pub mod models;
pub mod orchestrator;
pub mod remote;
pub mod report;
pub mod routine;
pub mod session;
pub mod state;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use app::router;
pub use config::Config;
pub use remote::{AttendanceApi, HttpAttendanceClient};
pub use state::AppState;
