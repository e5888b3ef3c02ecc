use chrono::{NaiveDate, NaiveTime};
use kernel::model::{
    id::{ScheduleId, ThemeId},
    schedule::Schedule,
    theme::Theme,
};

// schedules と themes を JOIN した結果を受ける型
#[derive(sqlx::FromRow)]
pub struct ScheduleRow {
    pub schedule_id: ScheduleId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub theme_id: ThemeId,
    pub theme_name: String,
    pub theme_description: String,
    pub theme_price: i32,
}

impl From<ScheduleRow> for Schedule {
    fn from(value: ScheduleRow) -> Self {
        let ScheduleRow {
            schedule_id,
            date,
            time,
            theme_id,
            theme_name,
            theme_description,
            theme_price,
        } = value;
        Schedule {
            schedule_id,
            theme: Theme {
                theme_id,
                name: theme_name,
                description: theme_description,
                price: theme_price,
            },
            date,
            time,
        }
    }
}
