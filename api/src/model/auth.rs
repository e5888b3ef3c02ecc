use garde::Validate;
use kernel::model::auth::AccessToken;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(length(min = 1))]
    pub username: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

impl From<AccessToken> for AccessTokenResponse {
    fn from(value: AccessToken) -> Self {
        Self {
            access_token: value.0,
        }
    }
}
