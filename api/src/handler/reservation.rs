use axum::{
    extract::{Path, Query, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use garde::Validate;
use kernel::model::{id::ReservationId, reservation::event::DeleteReservation};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::{AuthorizedMember, Json},
    model::reservation::{CreateReservationRequest, ReservationListQuery, ReservationResponse},
};

pub async fn create_reservation(
    member: AuthorizedMember,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let reservation_id = registry
        .reservation_repository()
        .create(req.into_event(member.id()))
        .await?;
    tracing::info!(
        reservation_id = %reservation_id,
        member_id = %member.id(),
        "Reservation has been created"
    );

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/reservations/{reservation_id}"))],
    ))
}

pub async fn show_reservation_list(
    Query(query): Query<ReservationListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ReservationResponse>>> {
    registry
        .reservation_repository()
        .find_all(query.into())
        .await
        .map(|reservations| {
            reservations
                .into_iter()
                .map(ReservationResponse::from)
                .collect()
        })
        .map(Json)
}

pub async fn delete_reservation(
    member: AuthorizedMember,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .reservation_repository()
        .delete(DeleteReservation::new(reservation_id, member.id()))
        .await?;
    tracing::info!(
        reservation_id = %reservation_id,
        member_id = %member.id(),
        "Reservation has been deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
