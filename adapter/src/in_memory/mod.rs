//! In-memory implementations of the kernel repositories.
//!
//! Every repository built from the same [`InMemoryDatabase`] shares one set of
//! tables behind a single async mutex, so a check and the write that depends
//! on it always happen under the same guard.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use kernel::model::{
    id::{MemberId, ReservationId, ScheduleId, ThemeId},
    member::Member,
    reservation::Reservation,
    schedule::Schedule,
    theme::Theme,
};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

mod auth;
mod catalog;
mod health;
mod member;
mod reservation;

pub use auth::InMemoryAuthRepository;
pub use catalog::{InMemoryScheduleRepository, InMemoryThemeRepository};
pub use health::InMemoryHealthCheckRepository;
pub use member::InMemoryMemberRepository;
pub use reservation::InMemoryReservationRepository;

#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Default)]
struct Tables {
    members: Vec<MemberRecord>,
    themes: Vec<Theme>,
    schedules: Vec<ScheduleRecord>,
    reservations: Vec<ReservationRecord>,
    tokens: HashMap<String, MemberId>,
}

struct MemberRecord {
    member: Member,
    password_hash: String,
}

struct ScheduleRecord {
    schedule_id: ScheduleId,
    theme_id: ThemeId,
    date: NaiveDate,
    time: NaiveTime,
}

struct ReservationRecord {
    reservation_id: ReservationId,
    schedule_id: ScheduleId,
    member_id: MemberId,
    name: String,
    reserved_at: DateTime<Utc>,
}

impl Tables {
    fn theme(&self, theme_id: ThemeId) -> Option<&Theme> {
        self.themes.iter().find(|t| t.theme_id == theme_id)
    }

    fn schedule(&self, schedule_id: ScheduleId) -> Option<Schedule> {
        let record = self
            .schedules
            .iter()
            .find(|s| s.schedule_id == schedule_id)?;
        self.join_schedule(record)
    }

    fn join_schedule(&self, record: &ScheduleRecord) -> Option<Schedule> {
        let theme = self.theme(record.theme_id)?.clone();
        Some(Schedule {
            schedule_id: record.schedule_id,
            theme,
            date: record.date,
            time: record.time,
        })
    }

    fn join_reservation(&self, record: &ReservationRecord) -> Option<Reservation> {
        Some(Reservation {
            reservation_id: record.reservation_id,
            reserved_by: record.member_id,
            name: record.name.clone(),
            reserved_at: record.reserved_at,
            schedule: self.schedule(record.schedule_id)?,
        })
    }
}
