use argon2::{password_hash::PasswordHash, Argon2, PasswordVerifier};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    auth::{event::CreateToken, AccessToken},
    id::MemberId,
};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

use crate::{
    database::{
        model::{
            auth::{from, AuthorizationKey},
            member::MemberCredentialRow,
        },
        ConnectionPool,
    },
    redis::RedisClient,
};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_member_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<MemberId>> {
        let key: AuthorizationKey = access_token.into();
        self.kv
            .get(&key)
            .await
            .map(|x| x.map(|id| id.into_inner()))
    }

    async fn verify_member(&self, username: &str, password: &str) -> AppResult<MemberId> {
        // 存在しないユーザー名とパスワード違いは同じエラーにする
        let row = sqlx::query_as::<_, MemberCredentialRow>(
            r#"
                SELECT member_id, password_hash
                FROM members
                WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or(AppError::InvalidCredentials)?;

        verify_password(password, &row.password_hash)?;
        Ok(row.member_id)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let (key, value) = from(event);
        self.kv.set_ex(&key, &value, self.ttl).await?;
        Ok(key.into())
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        let key: AuthorizationKey = (&access_token).into();
        self.kv.delete(&key).await
    }
}

pub(crate) fn verify_password(password: &str, hash: &str) -> AppResult<()> {
    let parsed = PasswordHash::new(hash)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AppError::InvalidCredentials)
}
