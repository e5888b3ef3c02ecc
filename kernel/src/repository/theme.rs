use crate::model::{
    id::ThemeId,
    theme::{event::CreateTheme, Theme},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ThemeRepository: Send + Sync {
    async fn create(&self, event: CreateTheme) -> AppResult<ThemeId>;
    async fn find_all(&self) -> AppResult<Vec<Theme>>;
    async fn find_by_id(&self, theme_id: ThemeId) -> AppResult<Option<Theme>>;
    // スケジュールから参照されているテーマは削除できない
    async fn delete(&self, theme_id: ThemeId) -> AppResult<()>;
}
