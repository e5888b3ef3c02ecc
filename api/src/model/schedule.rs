use chrono::{NaiveDate, NaiveTime};
use kernel::model::{
    id::{ScheduleId, ThemeId},
    schedule::{event::CreateSchedule, Schedule, ScheduleListOptions},
};
use serde::{Deserialize, Serialize};

use super::theme::ThemeResponse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub theme_id: ThemeId,
    pub date: NaiveDate,
    #[serde(with = "time_of_day")]
    pub time: NaiveTime,
}

impl From<CreateScheduleRequest> for CreateSchedule {
    fn from(value: CreateScheduleRequest) -> Self {
        let CreateScheduleRequest {
            theme_id,
            date,
            time,
        } = value;
        CreateSchedule {
            theme_id,
            date,
            time,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleListQuery {
    pub theme_id: ThemeId,
    pub date: NaiveDate,
}

impl From<ScheduleListQuery> for ScheduleListOptions {
    fn from(value: ScheduleListQuery) -> Self {
        let ScheduleListQuery { theme_id, date } = value;
        Self { theme_id, date }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub id: ScheduleId,
    pub theme: ThemeResponse,
    pub date: NaiveDate,
    #[serde(with = "time_of_day")]
    pub time: NaiveTime,
}

impl From<Schedule> for ScheduleResponse {
    fn from(value: Schedule) -> Self {
        let Schedule {
            schedule_id,
            theme,
            date,
            time,
        } = value;
        Self {
            id: schedule_id,
            theme: theme.into(),
            date,
            time,
        }
    }
}

// 時刻は "13:00" の形式でやり取りする。秒付きの入力も受け付ける
pub(crate) mod time_of_day {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hour_minute_time() {
        let theme_id = ThemeId::new();
        let json = format!(r#"{{"themeId":"{theme_id}","date":"2022-08-11","time":"13:00"}}"#);
        let req: CreateScheduleRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.theme_id, theme_id);
        assert_eq!(req.date, NaiveDate::from_ymd_opt(2022, 8, 11).unwrap());
        assert_eq!(req.time, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
    }

    #[test]
    fn rejects_malformed_time() {
        let json = format!(
            r#"{{"themeId":"{}","date":"2022-08-11","time":"1pm"}}"#,
            ThemeId::new()
        );
        assert!(serde_json::from_str::<CreateScheduleRequest>(&json).is_err());
    }

    #[test]
    fn renders_time_without_seconds() {
        let time = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        let mut out = Vec::new();
        time_of_day::serialize(&time, &mut serde_json::Serializer::new(&mut out)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), r#""09:05""#);
    }
}
