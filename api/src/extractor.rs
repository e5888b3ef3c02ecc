use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use kernel::model::{auth::AccessToken, id::MemberId, member::Member};
use registry::AppRegistry;
use serde::Serialize;
use shared::error::AppError;

// 本文の読み取りに失敗した場合も AppError として 400 を返す
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

// リクエストの前処理を実行後、handler に渡す構造体を定義
pub struct AuthorizedMember {
    pub access_token: AccessToken,
    pub member: Member,
}

impl AuthorizedMember {
    pub fn id(&self) -> MemberId {
        self.member.member_id
    }

    pub fn is_admin(&self) -> bool {
        self.member.is_admin()
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedMember {
    type Rejection = AppError;

    // ヘッダがない、形式が違う、未知のトークン、のいずれも同じエラーにする
    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let access_token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(AccessToken::from_bearer)
            .ok_or(AppError::UnauthenticatedError)?;

        let member_id = registry
            .auth_repository()
            .fetch_member_id_from_token(&access_token)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        let member = registry
            .member_repository()
            .find_current_member(member_id)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        Ok(Self {
            access_token,
            member,
        })
    }
}
