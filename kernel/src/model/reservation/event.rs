use crate::model::id::{MemberId, ReservationId, ScheduleId};
use derive_new::new;

#[derive(new)]
pub struct CreateReservation {
    pub schedule_id: ScheduleId,
    pub reserved_by: MemberId,
    pub name: String,
}

#[derive(Debug, new)]
pub struct DeleteReservation {
    pub reservation_id: ReservationId,
    pub requested_by: MemberId,
}
