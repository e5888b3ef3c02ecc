use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{
    id::{MemberId, ReservationId, ScheduleId, ThemeId},
    reservation::{event::CreateReservation, Reservation, ReservationListOptions},
};
use serde::{Deserialize, Serialize};

use super::schedule::ScheduleResponse;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[garde(skip)]
    pub schedule_id: ScheduleId,
    #[garde(length(min = 1))]
    pub name: String,
}

impl CreateReservationRequest {
    pub fn into_event(self, reserved_by: MemberId) -> CreateReservation {
        let CreateReservationRequest { schedule_id, name } = self;
        CreateReservation::new(schedule_id, reserved_by, name)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationListQuery {
    pub theme_id: ThemeId,
    pub date: NaiveDate,
}

impl From<ReservationListQuery> for ReservationListOptions {
    fn from(value: ReservationListQuery) -> Self {
        let ReservationListQuery { theme_id, date } = value;
        Self { theme_id, date }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub schedule: ScheduleResponse,
    pub name: String,
    pub reserved_by: MemberId,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            reservation_id,
            reserved_by,
            name,
            reserved_at: _,
            schedule,
        } = value;
        Self {
            id: reservation_id,
            schedule: schedule.into(),
            name,
            reserved_by,
        }
    }
}
