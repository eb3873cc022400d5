use crate::credential::SecretWord;
use crate::errors::AppError;
use crate::extra::{extra_notice, record_extra_class};
use crate::models::{
    ExtraClassRequest, SelectDayRequest, SessionView, SetStatusRequest, StatusReportResponse,
    SubmitRequest,
};
use crate::orchestrator;
use crate::report::fetch_status_report;
use crate::state::AppState;
use crate::ui::{render_index, render_status};
use axum::{Json, extract::State, response::Html};
use chrono::{Local, NaiveDate};
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_index(&session.view()))
}

pub async fn status_page() -> Html<String> {
    Html(render_status())
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    let session = state.session.lock().await;
    Json(session.view())
}

pub async fn select_day(
    State(state): State<AppState>,
    Json(payload): Json<SelectDayRequest>,
) -> Json<SessionView> {
    let mut session = state.session.lock().await;
    session.select_day(payload.day);
    Json(session.view())
}

pub async fn set_status(
    State(state): State<AppState>,
    Json(payload): Json<SetStatusRequest>,
) -> Result<Json<SessionView>, AppError> {
    let mut session = state.session.lock().await;
    if !session.store.set_status(&payload.class_id, payload.status) {
        return Err(AppError::bad_request(format!(
            "class '{}' is not scheduled on {}",
            payload.class_id,
            session.store.day().name()
        )));
    }
    Ok(Json(session.view()))
}

pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> Json<SessionView> {
    let (day, statuses) = {
        let mut session = state.session.lock().await;
        session.begin_submit();
        (session.store.day(), session.store.statuses().clone())
    };

    info!(day = day.name(), selected = statuses.len(), "submitting attendance");
    let credentials = SecretWord::new(payload.secret);
    let result =
        orchestrator::submit(state.api.as_ref(), day, &statuses, &credentials, today()).await;

    let mut session = state.session.lock().await;
    session.finish_submit(day, result.notice());
    Json(session.view())
}

pub async fn extra_class(
    State(state): State<AppState>,
    Json(payload): Json<ExtraClassRequest>,
) -> Json<SessionView> {
    {
        let mut session = state.session.lock().await;
        session.extra.course_name = payload.course_name.clone();
        session.extra.date = payload.date.clone();
        session.begin_extra();
    }

    let credentials = SecretWord::new(payload.secret);
    let result = record_extra_class(
        state.api.as_ref(),
        &payload.course_name,
        &payload.date,
        &credentials,
    )
    .await;
    let notice = extra_notice(&payload.course_name, &result);

    let mut session = state.session.lock().await;
    session.finish_extra(notice, result.ok().map(|_| today()));
    Json(session.view())
}

pub async fn get_attendance(
    State(state): State<AppState>,
) -> Result<Json<StatusReportResponse>, AppError> {
    let rows = fetch_status_report(state.api.as_ref())
        .await
        .inspect_err(|err| warn!("status report unavailable: {err}"))?;
    Ok(Json(StatusReportResponse { rows }))
}

// Server-local calendar date, not UTC.
fn today() -> NaiveDate {
    Local::now().date_naive()
}
