use crate::model::id::ThemeId;
pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub theme_id: ThemeId,
    pub name: String,
    pub description: String,
    pub price: i32,
}
