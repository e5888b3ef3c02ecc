use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::{AuthorizedMember, Json},
    model::member::{CreateMemberRequest, MemberResponse},
};

pub async fn register_member(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateMemberRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let member = registry.member_repository().create(req.into()).await?;
    tracing::info!(member_id = %member.member_id, "Member has been registered");

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/members/{}", member.member_id))],
    ))
}

pub async fn get_current_member(member: AuthorizedMember) -> Json<MemberResponse> {
    Json(MemberResponse::from(member.member))
}
