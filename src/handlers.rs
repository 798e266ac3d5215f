use crate::errors::AppError;
use crate::export::{ratings_csv, EXPORT_FILENAME};
use crate::models::{HistoryResponse, RateReceipt, RateRequest, RatingType, StatsSnapshot};
use crate::state::AppState;
use crate::stats::{history_at, record_rating_at, stats_at};
use crate::storage::persist_data;
use crate::ui::{DASHBOARD_HTML, KIOSK_HTML};
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use tracing::info;

pub async fn index() -> Html<&'static str> {
    Html(KIOSK_HTML)
}

pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

pub async fn rate(
    State(state): State<AppState>,
    Json(payload): Json<RateRequest>,
) -> Result<Json<RateReceipt>, AppError> {
    let rating = parse_rating(payload.tipo.as_ref())
        .ok_or_else(|| AppError::bad_request("Tipo de avaliação inválido"))?;

    let now = state.now();
    let mut data = state.data.lock().await;
    let previous_next_id = data.next_id;
    let stored = record_rating_at(&mut data, rating, now);
    if let Err(err) = persist_data(&state.data_path, &data).await {
        // An unsaved rating must not surface in stats or use up a number.
        data.ratings.pop();
        data.next_id = previous_next_id;
        return Err(err);
    }

    info!(
        tipo = rating.code(),
        sequential_number = stored.sequential_number,
        "rating recorded"
    );

    Ok(Json(RateReceipt {
        success: true,
        sequential_number: stored.sequential_number,
        date: stored.avaliacao_date,
        time: stored.avaliacao_time,
    }))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsSnapshot>, AppError> {
    let today = state.now().date();
    let data = state.data.lock().await;
    Ok(Json(stats_at(today, &data)))
}

pub async fn get_history(State(state): State<AppState>) -> Result<Json<HistoryResponse>, AppError> {
    let today = state.now().date();
    let data = state.data.lock().await;
    Ok(Json(HistoryResponse {
        avaliacoes: Some(history_at(today, &data)),
    }))
}

pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let data = state.data.lock().await;
    let body = ratings_csv(&data)?;
    let disposition = format!("attachment; filename={EXPORT_FILENAME}");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

fn parse_rating(value: Option<&serde_json::Value>) -> Option<RatingType> {
    let code = value?.as_u64()?;
    u8::try_from(code).ok()?.try_into().ok()
}
