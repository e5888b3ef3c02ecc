use axum::{
    extract::{Query, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::extractor::Json;
use crate::model::schedule::{CreateScheduleRequest, ScheduleListQuery, ScheduleResponse};

pub async fn register_schedule(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateScheduleRequest>,
) -> AppResult<impl IntoResponse> {
    let schedule_id = registry.schedule_repository().create(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/schedules/{schedule_id}"))],
    ))
}

pub async fn show_schedule_list(
    Query(query): Query<ScheduleListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ScheduleResponse>>> {
    registry
        .schedule_repository()
        .find_all(query.into())
        .await
        .map(|schedules| schedules.into_iter().map(ScheduleResponse::from).collect())
        .map(Json)
}
