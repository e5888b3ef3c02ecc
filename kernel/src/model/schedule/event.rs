use crate::model::id::ThemeId;
use chrono::{NaiveDate, NaiveTime};
use derive_new::new;

#[derive(new)]
pub struct CreateSchedule {
    pub theme_id: ThemeId,
    pub date: NaiveDate,
    pub time: NaiveTime,
}
