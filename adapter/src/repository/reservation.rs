use crate::database::{map_unique_violation, model::reservation::ReservationRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::{MemberId, ReservationId, ScheduleId};
use kernel::model::reservation::{
    event::{CreateReservation, DeleteReservation},
    Reservation, ReservationListOptions,
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

const SELECT_RESERVATIONS: &str = r#"
    SELECT
    r.reservation_id,
    r.member_id,
    r.name,
    r.reserved_at,
    s.schedule_id,
    s.date,
    s.time,
    t.theme_id,
    t.name AS theme_name,
    t.description AS theme_description,
    t.price AS theme_price
    FROM reservations AS r
    INNER JOIN schedules AS s ON r.schedule_id = s.schedule_id
    INNER JOIN themes AS t ON s.theme_id = t.theme_id
"#;

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    // 予約操作を行う
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId> {
        let mut tx = self.db.begin().await?;

        // 事前のチェックとして、以下を調べる。
        // - 指定のスケジュール ID をもつスケジュールが存在するか
        // - 存在した場合、そのスケジュールはすでに予約されていないか
        //
        // 同時に INSERT された場合は schedule_id の一意インデックスで弾かれる
        {
            let schedule_row = sqlx::query("SELECT schedule_id FROM schedules WHERE schedule_id = $1")
                .bind(event.schedule_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

            if schedule_row.is_none() {
                return Err(AppError::EntityNotFound(format!(
                    "schedule ({}) was not found",
                    event.schedule_id
                )));
            }

            let reserved = sqlx::query("SELECT reservation_id FROM reservations WHERE schedule_id = $1")
                .bind(event.schedule_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

            if reserved.is_some() {
                return Err(duplicate_reservation(event.schedule_id));
            }
        }

        let reservation_id = ReservationId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO reservations (reservation_id, schedule_id, member_id, name)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(reservation_id)
        .bind(event.schedule_id)
        .bind(event.reserved_by)
        .bind(&event.name)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || duplicate_reservation(event.schedule_id)))?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No reservation record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(reservation_id)
    }

    // テーマと日付で絞り込み、予約の古い順に並べる
    async fn find_all(&self, options: ReservationListOptions) -> AppResult<Vec<Reservation>> {
        let ReservationListOptions { theme_id, date } = options;
        let sql = format!(
            "{SELECT_RESERVATIONS} WHERE s.theme_id = $1 AND s.date = $2 ORDER BY r.reserved_at ASC"
        );
        sqlx::query_as::<_, ReservationRow>(&sql)
            .bind(theme_id)
            .bind(date)
            .fetch_all(self.db.inner_ref())
            .await
            .map(|rows| rows.into_iter().map(Reservation::from).collect())
            .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let sql = format!("{SELECT_RESERVATIONS} WHERE r.reservation_id = $1");
        sqlx::query_as::<_, ReservationRow>(&sql)
            .bind(reservation_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map(|row| row.map(Reservation::from))
            .map_err(AppError::SpecificOperationError)
    }

    // 予約の削除操作を行う
    async fn delete(&self, event: DeleteReservation) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        // 対象行をロックしてから予約者を確かめる。
        // ロックを取ったまま削除するため、確認と削除の間に他の操作は入らない
        {
            let owner: Option<MemberId> = sqlx::query_scalar(
                r#"
                    SELECT member_id
                    FROM reservations
                    WHERE reservation_id = $1
                    FOR UPDATE
                "#,
            )
            .bind(event.reservation_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            match owner {
                None => {
                    return Err(AppError::EntityNotFound(format!(
                        "reservation ({}) was not found",
                        event.reservation_id
                    )))
                }
                Some(owner) if owner != event.requested_by => {
                    return Err(AppError::ForbiddenOperation)
                }
                Some(_) => {}
            }
        }

        let res = sqlx::query(
            r#"
                DELETE FROM reservations
                WHERE reservation_id = $1 AND member_id = $2
            "#,
        )
        .bind(event.reservation_id)
        .bind(event.requested_by)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No reservation record has been deleted".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }
}

fn duplicate_reservation(schedule_id: ScheduleId) -> AppError {
    AppError::DuplicateReservation(format!("schedule ({schedule_id}) is already reserved"))
}

#[cfg(all(test, feature = "database-tests"))]
mod tests {
    use super::*;
    use crate::repository::{
        member::MemberRepositoryImpl, schedule::ScheduleRepositoryImpl,
        theme::ThemeRepositoryImpl,
    };
    use chrono::{NaiveDate, NaiveTime};
    use kernel::model::{
        member::event::CreateMember, schedule::event::CreateSchedule,
        theme::event::CreateTheme,
    };
    use kernel::repository::{
        member::MemberRepository, schedule::ScheduleRepository, theme::ThemeRepository,
    };
    use std::sync::Arc;

    struct Fixture {
        repo: Arc<ReservationRepositoryImpl>,
        theme_id: kernel::model::id::ThemeId,
        schedule_id: ScheduleId,
        date: NaiveDate,
        owner: MemberId,
        other: MemberId,
    }

    async fn setup(pool: sqlx::PgPool) -> anyhow::Result<Fixture> {
        let db = ConnectionPool::new(pool);
        let members = MemberRepositoryImpl::new(db.clone());
        let owner = members
            .create(CreateMember::new("username".into(), "password".into(), "name".into(), "010".into()))
            .await?
            .member_id;
        let other = members
            .create(CreateMember::new("username2".into(), "password".into(), "name".into(), "010".into()))
            .await?
            .member_id;

        let theme_id = ThemeRepositoryImpl::new(db.clone())
            .create(CreateTheme::new("Theme".into(), "Description".into(), 22000))
            .await?;
        let date = NaiveDate::from_ymd_opt(2022, 8, 11).unwrap();
        let schedule_id = ScheduleRepositoryImpl::new(db.clone())
            .create(CreateSchedule::new(
                theme_id,
                date,
                NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            ))
            .await?;

        Ok(Fixture {
            repo: Arc::new(ReservationRepositoryImpl::new(db)),
            theme_id,
            schedule_id,
            date,
            owner,
            other,
        })
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn create_then_list_by_theme_and_date(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let f = setup(pool).await?;
        let reservation_id = f
            .repo
            .create(CreateReservation::new(f.schedule_id, f.owner, "brown".into()))
            .await?;

        let list = f
            .repo
            .find_all(ReservationListOptions {
                theme_id: f.theme_id,
                date: f.date,
            })
            .await?;
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].reservation_id, reservation_id);
        assert!(list[0].is_owned_by(f.owner));

        let other_day = f
            .repo
            .find_all(ReservationListOptions {
                theme_id: f.theme_id,
                date: f.date.succ_opt().unwrap(),
            })
            .await?;
        assert!(other_day.is_empty());
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn concurrent_creates_admit_exactly_one(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let f = setup(pool).await?;
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = f.repo.clone();
                let schedule_id = f.schedule_id;
                let member = if i % 2 == 0 { f.owner } else { f.other };
                tokio::spawn(async move {
                    repo.create(CreateReservation::new(schedule_id, member, "name".into()))
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

    #[sqlx::test(migrations = "./migrations")]
    async fn only_owner_can_delete(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let f = setup(pool).await?;
        let reservation_id = f
            .repo
            .create(CreateReservation::new(f.schedule_id, f.owner, "brown".into()))
            .await?;

        let res = f
            .repo
            .delete(DeleteReservation::new(reservation_id, f.other))
            .await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));

        f.repo
            .delete(DeleteReservation::new(reservation_id, f.owner))
            .await?;
        assert!(f.repo.find_by_id(reservation_id).await?.is_none());

        let res = f
            .repo
            .delete(DeleteReservation::new(reservation_id, f.owner))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }
}
