use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::ThemeId,
    theme::{event::CreateTheme, Theme},
};
use kernel::repository::theme::ThemeRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::theme::ThemeRow, ConnectionPool};

#[derive(new)]
pub struct ThemeRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ThemeRepository for ThemeRepositoryImpl {
    async fn create(&self, event: CreateTheme) -> AppResult<ThemeId> {
        let theme_id = ThemeId::new();
        sqlx::query(
            r#"
                INSERT INTO themes (theme_id, name, description, price)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(theme_id)
        .bind(event.name)
        .bind(event.description)
        .bind(event.price)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(theme_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Theme>> {
        let rows = sqlx::query_as::<_, ThemeRow>(
            r#"
                SELECT theme_id, name, description, price
                FROM themes
                ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Theme::from).collect())
    }

    async fn find_by_id(&self, theme_id: ThemeId) -> AppResult<Option<Theme>> {
        let row = sqlx::query_as::<_, ThemeRow>(
            r#"
                SELECT theme_id, name, description, price
                FROM themes
                WHERE theme_id = $1
            "#,
        )
        .bind(theme_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Theme::from))
    }

    async fn delete(&self, theme_id: ThemeId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM themes WHERE theme_id = $1")
            .bind(theme_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                    AppError::ForbiddenOperation
                }
                _ => AppError::SpecificOperationError(e),
            })?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "theme ({theme_id}) was not found"
            )));
        }
        Ok(())
    }
}
