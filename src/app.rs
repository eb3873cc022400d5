use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/status", get(handlers::status_page))
        .route("/api/session", get(handlers::get_session))
        .route("/api/day", post(handlers::select_day))
        .route("/api/status", post(handlers::set_status))
        .route("/api/submit", post(handlers::submit))
        .route("/api/extra", post(handlers::extra_class))
        .route("/api/attendance", get(handlers::get_attendance))
        .with_state(state)
}
