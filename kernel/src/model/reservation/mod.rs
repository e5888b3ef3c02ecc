use crate::model::{
    id::{MemberId, ReservationId, ThemeId},
    schedule::Schedule,
};
use chrono::{DateTime, NaiveDate, Utc};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub reserved_by: MemberId,
    pub name: String,
    pub reserved_at: DateTime<Utc>,
    pub schedule: Schedule,
}

impl Reservation {
    /// 予約の削除はこの予約を作成したメンバーにのみ許される
    pub fn is_owned_by(&self, member_id: MemberId) -> bool {
        self.reserved_by == member_id
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReservationListOptions {
    pub theme_id: ThemeId,
    pub date: NaiveDate,
}
