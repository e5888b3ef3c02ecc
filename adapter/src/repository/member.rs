use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::MemberId,
    member::{event::CreateMember, Member},
    role::Role,
};
use kernel::repository::member::MemberRepository;
use shared::error::{AppError, AppResult};

use crate::database::{map_unique_violation, model::member::MemberRow, ConnectionPool};

#[derive(new)]
pub struct MemberRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl MemberRepository for MemberRepositoryImpl {
    async fn create(&self, event: CreateMember) -> AppResult<Member> {
        let member_id = MemberId::new();
        let password_hash = hash_password(&event.password)?;
        let role = Role::User;

        // username の一意性はインデックスで保証する
        let res = sqlx::query(
            r#"
                INSERT INTO members (member_id, username, password_hash, name, phone, role)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(member_id)
        .bind(&event.username)
        .bind(password_hash)
        .bind(&event.name)
        .bind(&event.phone)
        .bind(role.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| {
            map_unique_violation(e, || AppError::DuplicateUsername(event.username.clone()))
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No member record has been created".into(),
            ));
        }

        Ok(Member {
            member_id,
            username: event.username,
            name: event.name,
            phone: event.phone,
            role,
        })
    }

    async fn find_current_member(&self, member_id: MemberId) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, MemberRow>(
            r#"
                SELECT member_id, username, name, phone, role
                FROM members
                WHERE member_id = $1
            "#,
        )
        .bind(member_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Member::try_from)
        .transpose()
    }

    async fn ensure_admin(&self, event: CreateMember) -> AppResult<()> {
        let password_hash = hash_password(&event.password)?;
        let res = sqlx::query(
            r#"
                INSERT INTO members (member_id, username, password_hash, name, phone, role)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(MemberId::new())
        .bind(&event.username)
        .bind(password_hash)
        .bind(&event.name)
        .bind(&event.phone)
        .bind(Role::Admin.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() > 0 {
            tracing::info!(username = %event.username, "Admin member has been created");
        }
        Ok(())
    }
}

pub(crate) fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}
