use garde::Validate;
use kernel::model::{
    id::ThemeId,
    theme::{event::CreateTheme, Theme},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateThemeRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[serde(alias = "desc")]
    #[garde(skip)]
    pub description: String,
    #[garde(range(min = 0))]
    pub price: i32,
}

impl From<CreateThemeRequest> for CreateTheme {
    fn from(value: CreateThemeRequest) -> Self {
        let CreateThemeRequest {
            name,
            description,
            price,
        } = value;
        CreateTheme {
            name,
            description,
            price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub id: ThemeId,
    pub name: String,
    pub description: String,
    pub price: i32,
}

impl From<Theme> for ThemeResponse {
    fn from(value: Theme) -> Self {
        let Theme {
            theme_id,
            name,
            description,
            price,
        } = value;
        Self {
            id: theme_id,
            name,
            description,
            price,
        }
    }
}
