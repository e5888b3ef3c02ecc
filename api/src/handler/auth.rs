use axum::{extract::State, http::StatusCode};
use garde::Validate;
use kernel::model::auth::event::CreateToken;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::{AuthorizedMember, Json},
    model::auth::{AccessTokenResponse, LoginRequest},
};

pub async fn login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AccessTokenResponse>> {
    req.validate(&())?;

    let member_id = registry
        .auth_repository()
        .verify_member(&req.username, &req.password)
        .await?;
    let access_token = registry
        .auth_repository()
        .create_token(CreateToken::new(member_id))
        .await?;

    Ok(Json(access_token.into()))
}

pub async fn logout(
    member: AuthorizedMember,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .auth_repository()
        .delete_token(member.access_token)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
