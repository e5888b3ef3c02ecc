use crate::model::{id::ScheduleId, theme::Theme};
use chrono::{NaiveDate, NaiveTime};
pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub schedule_id: ScheduleId,
    pub theme: Theme,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduleListOptions {
    pub theme_id: crate::model::id::ThemeId,
    pub date: NaiveDate,
}
