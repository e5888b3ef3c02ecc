use crate::model::{
    id::ReservationId,
    reservation::{
        event::{CreateReservation, DeleteReservation},
        Reservation, ReservationListOptions,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    // 予約を作成する。同じスケジュールへの予約は一件まで
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId>;
    // テーマと日付に一致する予約を作成順に取得する
    async fn find_all(&self, options: ReservationListOptions) -> AppResult<Vec<Reservation>>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    // 予約者本人の場合のみ削除する
    async fn delete(&self, event: DeleteReservation) -> AppResult<()>;
}
