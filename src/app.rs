use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/service-worker.js", get(handlers::service_worker))
        .route("/api/today", get(handlers::get_today))
        .route("/api/records", get(handlers::list_records).post(handlers::add_record))
        .route("/api/records/delete", post(handlers::delete_record))
        .route("/api/goal", get(handlers::get_goal).put(handlers::set_goal))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/chart", get(handlers::get_chart))
        .with_state(state)
}
