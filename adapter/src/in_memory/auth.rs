use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    auth::{event::CreateToken, AccessToken},
    id::MemberId,
};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};

use super::InMemoryDatabase;
use crate::repository::auth::verify_password;

#[derive(new)]
pub struct InMemoryAuthRepository {
    db: InMemoryDatabase,
}

#[async_trait]
impl AuthRepository for InMemoryAuthRepository {
    async fn fetch_member_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<MemberId>> {
        let tables = self.db.tables.lock().await;
        Ok(tables.tokens.get(&access_token.0).copied())
    }

    async fn verify_member(&self, username: &str, password: &str) -> AppResult<MemberId> {
        let (member_id, password_hash) = {
            let tables = self.db.tables.lock().await;
            let record = tables
                .members
                .iter()
                .find(|m| m.member.username == username)
                .ok_or(AppError::InvalidCredentials)?;
            (record.member.member_id, record.password_hash.clone())
        };
        verify_password(password, &password_hash)?;
        Ok(member_id)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let mut tables = self.db.tables.lock().await;
        tables
            .tokens
            .insert(event.access_token.clone(), event.member_id);
        Ok(AccessToken(event.access_token))
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        let mut tables = self.db.tables.lock().await;
        tables.tokens.remove(&access_token.0);
        Ok(())
    }
}
