use kernel::model::{id::ThemeId, theme::Theme};

#[derive(sqlx::FromRow)]
pub struct ThemeRow {
    pub theme_id: ThemeId,
    pub name: String,
    pub description: String,
    pub price: i32,
}

impl From<ThemeRow> for Theme {
    fn from(value: ThemeRow) -> Self {
        let ThemeRow {
            theme_id,
            name,
            description,
            price,
        } = value;
        Theme {
            theme_id,
            name,
            description,
            price,
        }
    }
}
