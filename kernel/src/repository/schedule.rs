use crate::model::{
    id::ScheduleId,
    schedule::{event::CreateSchedule, Schedule, ScheduleListOptions},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn create(&self, event: CreateSchedule) -> AppResult<ScheduleId>;
    async fn find_all(&self, options: ScheduleListOptions) -> AppResult<Vec<Schedule>>;
    async fn find_by_id(&self, schedule_id: ScheduleId) -> AppResult<Option<Schedule>>;
}
