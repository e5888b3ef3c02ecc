use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use garde::Validate;
use kernel::model::id::ThemeId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{AuthorizedMember, Json},
    model::theme::{CreateThemeRequest, ThemeResponse},
};

pub async fn register_theme(
    member: AuthorizedMember,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateThemeRequest>,
) -> AppResult<impl IntoResponse> {
    if !member.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let theme_id = registry.theme_repository().create(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/themes/{theme_id}"))],
    ))
}

pub async fn show_theme_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ThemeResponse>>> {
    registry
        .theme_repository()
        .find_all()
        .await
        .map(|themes| themes.into_iter().map(ThemeResponse::from).collect())
        .map(Json)
}

pub async fn delete_theme(
    member: AuthorizedMember,
    Path(theme_id): Path<ThemeId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !member.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .theme_repository()
        .delete(theme_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
