use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use kernel::model::{
    id::{MemberId, ReservationId, ScheduleId, ThemeId},
    reservation::Reservation,
    schedule::Schedule,
    theme::Theme,
};

// 予約一覧を取得する際に使う型
// reservations にスケジュールとテーマの情報を JOIN したもの
#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub member_id: MemberId,
    pub name: String,
    pub reserved_at: DateTime<Utc>,
    pub schedule_id: ScheduleId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub theme_id: ThemeId,
    pub theme_name: String,
    pub theme_description: String,
    pub theme_price: i32,
}

impl From<ReservationRow> for Reservation {
    fn from(value: ReservationRow) -> Self {
        let ReservationRow {
            reservation_id,
            member_id,
            name,
            reserved_at,
            schedule_id,
            date,
            time,
            theme_id,
            theme_name,
            theme_description,
            theme_price,
        } = value;
        Reservation {
            reservation_id,
            reserved_by: member_id,
            name,
            reserved_at,
            schedule: Schedule {
                schedule_id,
                theme: Theme {
                    theme_id,
                    name: theme_name,
                    description: theme_description,
                    price: theme_price,
                },
                date,
                time,
            },
        }
    }
}
