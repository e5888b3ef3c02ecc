use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    id::ReservationId,
    reservation::{
        event::{CreateReservation, DeleteReservation},
        Reservation, ReservationListOptions,
    },
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

use super::{InMemoryDatabase, ReservationRecord};

#[derive(new)]
pub struct InMemoryReservationRepository {
    db: InMemoryDatabase,
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId> {
        let mut tables = self.db.tables.lock().await;

        if tables.schedule(event.schedule_id).is_none() {
            return Err(AppError::EntityNotFound(format!(
                "schedule ({}) was not found",
                event.schedule_id
            )));
        }
        if tables
            .reservations
            .iter()
            .any(|r| r.schedule_id == event.schedule_id)
        {
            return Err(AppError::DuplicateReservation(format!(
                "schedule ({}) is already reserved",
                event.schedule_id
            )));
        }

        let reservation_id = ReservationId::new();
        tables.reservations.push(ReservationRecord {
            reservation_id,
            schedule_id: event.schedule_id,
            member_id: event.reserved_by,
            name: event.name,
            reserved_at: Utc::now(),
        });
        Ok(reservation_id)
    }

    async fn find_all(&self, options: ReservationListOptions) -> AppResult<Vec<Reservation>> {
        let tables = self.db.tables.lock().await;
        // Vec は挿入順なので、そのまま作成順になる
        Ok(tables
            .reservations
            .iter()
            .filter_map(|r| tables.join_reservation(r))
            .filter(|r| {
                r.schedule.theme.theme_id == options.theme_id && r.schedule.date == options.date
            })
            .collect())
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let tables = self.db.tables.lock().await;
        Ok(tables
            .reservations
            .iter()
            .find(|r| r.reservation_id == reservation_id)
            .and_then(|r| tables.join_reservation(r)))
    }

    async fn delete(&self, event: DeleteReservation) -> AppResult<()> {
        let mut tables = self.db.tables.lock().await;
        let not_found = || {
            AppError::EntityNotFound(format!(
                "reservation ({}) was not found",
                event.reservation_id
            ))
        };
        let position = tables
            .reservations
            .iter()
            .position(|r| r.reservation_id == event.reservation_id)
            .ok_or_else(not_found)?;
        let reservation = tables
            .join_reservation(&tables.reservations[position])
            .ok_or_else(not_found)?;

        if !reservation.is_owned_by(event.requested_by) {
            return Err(AppError::ForbiddenOperation);
        }
        tables.reservations.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::{InMemoryScheduleRepository, InMemoryThemeRepository};
    use chrono::{NaiveDate, NaiveTime};
    use kernel::model::{
        id::{MemberId, ScheduleId, ThemeId},
        schedule::event::CreateSchedule,
        theme::event::CreateTheme,
    };
    use kernel::repository::{schedule::ScheduleRepository, theme::ThemeRepository};
    use std::sync::Arc;

    async fn setup() -> anyhow::Result<(Arc<InMemoryReservationRepository>, ThemeId, ScheduleId)> {
        let db = InMemoryDatabase::new();
        let theme_id = InMemoryThemeRepository::new(db.clone())
            .create(CreateTheme::new("Theme".into(), "Description".into(), 22000))
            .await?;
        let schedule_id = InMemoryScheduleRepository::new(db.clone())
            .create(CreateSchedule::new(
                theme_id,
                NaiveDate::from_ymd_opt(2022, 8, 11).unwrap(),
                NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            ))
            .await?;
        Ok((
            Arc::new(InMemoryReservationRepository::new(db)),
            theme_id,
            schedule_id,
        ))
    }

    #[tokio::test]
    async fn concurrent_creates_admit_exactly_one() -> anyhow::Result<()> {
        let (repo, _, schedule_id) = setup().await?;

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create(CreateReservation::new(
                        schedule_id,
                        MemberId::new(),
                        "name".into(),
                    ))
                    .await
                })
            })
            .collect();

        let mut succeeded = 0;
        for handle in handles {
            match handle.await? {
                Ok(_) => succeeded += 1,
                Err(AppError::DuplicateReservation(_)) => {}
                Err(e) => anyhow::bail!("unexpected error: {e}"),
            }
        }
        assert_eq!(succeeded, 1);
        Ok(())
    }

    #[tokio::test]
    async fn delete_checks_existence_then_owner() -> anyhow::Result<()> {
        let (repo, theme_id, schedule_id) = setup().await?;
        let owner = MemberId::new();
        let reservation_id = repo
            .create(CreateReservation::new(schedule_id, owner, "brown".into()))
            .await?;

        assert!(matches!(
            repo.delete(DeleteReservation::new(reservation_id, MemberId::new()))
                .await,
            Err(AppError::ForbiddenOperation)
        ));
        assert!(matches!(
            repo.delete(DeleteReservation::new(ReservationId::new(), owner))
                .await,
            Err(AppError::EntityNotFound(_))
        ));

        repo.delete(DeleteReservation::new(reservation_id, owner))
            .await?;
        let list = repo
            .find_all(ReservationListOptions {
                theme_id,
                date: NaiveDate::from_ymd_opt(2022, 8, 11).unwrap(),
            })
            .await?;
        assert!(list.is_empty());
        Ok(())
    }
}
