use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{ScheduleId, ThemeId},
    schedule::{event::CreateSchedule, Schedule, ScheduleListOptions},
    theme::{event::CreateTheme, Theme},
};
use kernel::repository::{schedule::ScheduleRepository, theme::ThemeRepository};
use shared::error::{AppError, AppResult};

use super::{InMemoryDatabase, ScheduleRecord};

#[derive(new)]
pub struct InMemoryThemeRepository {
    db: InMemoryDatabase,
}

#[async_trait]
impl ThemeRepository for InMemoryThemeRepository {
    async fn create(&self, event: CreateTheme) -> AppResult<ThemeId> {
        let theme_id = ThemeId::new();
        let mut tables = self.db.tables.lock().await;
        tables.themes.push(Theme {
            theme_id,
            name: event.name,
            description: event.description,
            price: event.price,
        });
        Ok(theme_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Theme>> {
        Ok(self.db.tables.lock().await.themes.clone())
    }

    async fn find_by_id(&self, theme_id: ThemeId) -> AppResult<Option<Theme>> {
        Ok(self.db.tables.lock().await.theme(theme_id).cloned())
    }

    async fn delete(&self, theme_id: ThemeId) -> AppResult<()> {
        let mut tables = self.db.tables.lock().await;
        if tables.schedules.iter().any(|s| s.theme_id == theme_id) {
            return Err(AppError::ForbiddenOperation);
        }
        let before = tables.themes.len();
        tables.themes.retain(|t| t.theme_id != theme_id);
        if tables.themes.len() == before {
            return Err(AppError::EntityNotFound(format!(
                "theme ({theme_id}) was not found"
            )));
        }
        Ok(())
    }
}

#[derive(new)]
pub struct InMemoryScheduleRepository {
    db: InMemoryDatabase,
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleRepository {
    async fn create(&self, event: CreateSchedule) -> AppResult<ScheduleId> {
        let mut tables = self.db.tables.lock().await;
        if tables.theme(event.theme_id).is_none() {
            return Err(AppError::EntityNotFound(format!(
                "theme ({}) was not found",
                event.theme_id
            )));
        }
        let schedule_id = ScheduleId::new();
        tables.schedules.push(ScheduleRecord {
            schedule_id,
            theme_id: event.theme_id,
            date: event.date,
            time: event.time,
        });
        Ok(schedule_id)
    }

    async fn find_all(&self, options: ScheduleListOptions) -> AppResult<Vec<Schedule>> {
        let tables = self.db.tables.lock().await;
        let mut schedules: Vec<Schedule> = tables
            .schedules
            .iter()
            .filter(|s| s.theme_id == options.theme_id && s.date == options.date)
            .filter_map(|s| tables.join_schedule(s))
            .collect();
        schedules.sort_by_key(|s| s.time);
        Ok(schedules)
    }

    async fn find_by_id(&self, schedule_id: ScheduleId) -> AppResult<Option<Schedule>> {
        Ok(self.db.tables.lock().await.schedule(schedule_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[tokio::test]
    async fn schedule_requires_existing_theme() {
        let repo = InMemoryScheduleRepository::new(InMemoryDatabase::new());
        let res = repo
            .create(CreateSchedule::new(
                ThemeId::new(),
                NaiveDate::from_ymd_opt(2022, 8, 11).unwrap(),
                NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            ))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn find_by_id_joins_schedule_with_its_theme() -> anyhow::Result<()> {
        let db = InMemoryDatabase::new();
        let themes = InMemoryThemeRepository::new(db.clone());
        let schedules = InMemoryScheduleRepository::new(db);

        let theme_id = themes
            .create(CreateTheme::new("Theme".into(), "Description".into(), 22000))
            .await?;
        let theme = themes.find_by_id(theme_id).await?.unwrap();
        assert_eq!(theme.name, "Theme");
        assert_eq!(theme.price, 22000);

        let date = NaiveDate::from_ymd_opt(2022, 8, 11).unwrap();
        let time = NaiveTime::from_hms_opt(13, 0, 0).unwrap();
        let schedule_id = schedules
            .create(CreateSchedule::new(theme_id, date, time))
            .await?;

        let schedule = schedules.find_by_id(schedule_id).await?.unwrap();
        assert_eq!(schedule.schedule_id, schedule_id);
        assert_eq!(schedule.theme, theme);
        assert_eq!(schedule.date, date);
        assert_eq!(schedule.time, time);

        assert!(schedules.find_by_id(ScheduleId::new()).await?.is_none());
        assert!(themes.find_by_id(ThemeId::new()).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn theme_in_use_cannot_be_deleted() -> anyhow::Result<()> {
        let db = InMemoryDatabase::new();
        let themes = InMemoryThemeRepository::new(db.clone());
        let schedules = InMemoryScheduleRepository::new(db);

        let theme_id = themes
            .create(CreateTheme::new("Theme".into(), "Description".into(), 22000))
            .await?;
        schedules
            .create(CreateSchedule::new(
                theme_id,
                NaiveDate::from_ymd_opt(2022, 8, 11).unwrap(),
                NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            ))
            .await?;

        assert!(matches!(
            themes.delete(theme_id).await,
            Err(AppError::ForbiddenOperation)
        ));
        Ok(())
    }
}
