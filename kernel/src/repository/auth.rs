use crate::model::{
    auth::{event::CreateToken, AccessToken},
    id::MemberId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn fetch_member_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<MemberId>>;
    async fn verify_member(&self, username: &str, password: &str) -> AppResult<MemberId>;
    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken>;
    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()>;
}
