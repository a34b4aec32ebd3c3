use crate::calendar;
use crate::errors::AppError;
use crate::models::{
    ChartSeries, DeleteRequest, DeleteResponse, GoalRequest, GoalResponse, RecordItem, RecordPage,
    RecordRequest, RecordResponse, StatsResponse, TodayResponse, WindowQuery,
};
use crate::notice::NOTICE_DURATION_MS;
use crate::pagination::Window;
use crate::state::AppState;
use crate::trend::annotate;
use crate::ui::{SERVICE_WORKER_JS, render_index};
use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
};

pub async fn index() -> Html<String> {
    Html(render_index(calendar::today(), NOTICE_DURATION_MS))
}

pub async fn service_worker() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], SERVICE_WORKER_JS)
}

pub async fn get_today() -> Json<TodayResponse> {
    Json(TodayResponse {
        date: calendar::today(),
    })
}

pub async fn list_records(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<RecordPage>, AppError> {
    let window = query.window.map(Window::new).unwrap_or_default();
    if window.size() == 0 {
        return Err(AppError::bad_request("window must be at least 1"));
    }

    let tracker = state.tracker.lock().await;
    let shown = tracker.list_descending(window.size());
    let items = annotate(&shown)
        .into_iter()
        .map(|(entry, trend)| RecordItem {
            date: entry.date,
            weight: entry.weight,
            meal: entry.meal.clone(),
            trend,
            arrow: trend.map(|t| t.arrow()).unwrap_or_default().to_string(),
        })
        .collect();
    let total = tracker.entries().len();

    Ok(Json(RecordPage {
        items,
        window: window.size(),
        total,
        has_more: window.has_more(total),
    }))
}

pub async fn add_record(
    State(state): State<AppState>,
    Json(payload): Json<RecordRequest>,
) -> Result<Json<RecordResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    let notice = tracker
        .upsert(payload.date, payload.weight, payload.meal)
        .await?;
    Ok(Json(RecordResponse { notice }))
}

pub async fn delete_record(
    State(state): State<AppState>,
    Json(payload): Json<DeleteRequest>,
) -> Result<Json<DeleteResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    let deleted = tracker.delete(payload.date, payload.weight).await?;
    Ok(Json(DeleteResponse { deleted }))
}

pub async fn get_goal(State(state): State<AppState>) -> Json<GoalResponse> {
    let tracker = state.tracker.lock().await;
    Json(GoalResponse {
        goal: tracker.goal(),
        updated: false,
    })
}

pub async fn set_goal(
    State(state): State<AppState>,
    Json(payload): Json<GoalRequest>,
) -> Result<Json<GoalResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    let updated = tracker.set_goal(payload.goal).await?;
    Ok(Json(GoalResponse {
        goal: tracker.goal(),
        updated,
    }))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let tracker = state.tracker.lock().await;
    let stats = tracker.stats();
    let notice = stats
        .as_ref()
        .and_then(|stats| stats.milestone)
        .map(|milestone| milestone.notice());

    Json(StatsResponse {
        stats,
        notice,
        notice_duration_ms: NOTICE_DURATION_MS,
    })
}

pub async fn get_chart(State(state): State<AppState>) -> Json<ChartSeries> {
    let tracker = state.tracker.lock().await;
    Json(tracker.chart_series())
}
