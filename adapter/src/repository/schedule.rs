use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::ScheduleId,
    schedule::{event::CreateSchedule, Schedule, ScheduleListOptions},
};
use kernel::repository::schedule::ScheduleRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::schedule::ScheduleRow, ConnectionPool};

#[derive(new)]
pub struct ScheduleRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ScheduleRepository for ScheduleRepositoryImpl {
    async fn create(&self, event: CreateSchedule) -> AppResult<ScheduleId> {
        let schedule_id = ScheduleId::new();
        sqlx::query(
            r#"
                INSERT INTO schedules (schedule_id, theme_id, date, time)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(schedule_id)
        .bind(event.theme_id)
        .bind(event.date)
        .bind(event.time)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::EntityNotFound(format!("theme ({}) was not found", event.theme_id))
            }
            _ => AppError::SpecificOperationError(e),
        })?;

        Ok(schedule_id)
    }

    async fn find_all(&self, options: ScheduleListOptions) -> AppResult<Vec<Schedule>> {
        let ScheduleListOptions { theme_id, date } = options;
        let rows = sqlx::query_as::<_, ScheduleRow>(
            r#"
                SELECT
                s.schedule_id,
                s.date,
                s.time,
                t.theme_id,
                t.name AS theme_name,
                t.description AS theme_description,
                t.price AS theme_price
                FROM schedules AS s
                INNER JOIN themes AS t ON s.theme_id = t.theme_id
                WHERE s.theme_id = $1 AND s.date = $2
                ORDER BY s.time ASC
            "#,
        )
        .bind(theme_id)
        .bind(date)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Schedule::from).collect())
    }

    async fn find_by_id(&self, schedule_id: ScheduleId) -> AppResult<Option<Schedule>> {
        let row = sqlx::query_as::<_, ScheduleRow>(
            r#"
                SELECT
                s.schedule_id,
                s.date,
                s.time,
                t.theme_id,
                t.name AS theme_name,
                t.description AS theme_description,
                t.price AS theme_price
                FROM schedules AS s
                INNER JOIN themes AS t ON s.theme_id = t.theme_id
                WHERE s.schedule_id = $1
            "#,
        )
        .bind(schedule_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Schedule::from))
    }
}
