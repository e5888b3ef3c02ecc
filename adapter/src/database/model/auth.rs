use crate::redis::model::{RedisKey, RedisValue};
use kernel::model::{
    auth::{event::CreateToken, AccessToken},
    id::MemberId,
};
use shared::error::{AppError, AppResult};
use std::str::FromStr;

pub struct AuthorizationKey(String);
pub struct AuthorizedMemberId(MemberId);

pub fn from(event: CreateToken) -> (AuthorizationKey, AuthorizedMemberId) {
    (
        AuthorizationKey(event.access_token),
        AuthorizedMemberId(event.member_id),
    )
}

impl From<AuthorizationKey> for AccessToken {
    fn from(key: AuthorizationKey) -> Self {
        Self(key.0)
    }
}

impl From<&AccessToken> for AuthorizationKey {
    fn from(token: &AccessToken) -> Self {
        Self(token.0.clone())
    }
}

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedMemberId;

    fn inner(&self) -> String {
        format!("auth:token:{}", self.0)
    }
}

impl RedisValue for AuthorizedMemberId {
    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<String> for AuthorizedMemberId {
    type Error = AppError;

    fn try_from(s: String) -> AppResult<Self> {
        Ok(Self(MemberId::from_str(&s).map_err(|e| {
            AppError::ConversionEntityError(format!("stored member id `{s}`: {e}"))
        })?))
    }
}

impl AuthorizedMemberId {
    pub fn into_inner(self) -> MemberId {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_namespaced() {
        let key = AuthorizationKey::from(&AccessToken("abc".into()));
        assert_eq!(key.inner(), "auth:token:abc");
    }

    #[test]
    fn stored_value_round_trips_to_member_id() {
        let member_id = MemberId::new();
        let (_, value) = from(CreateToken::new(member_id));
        let restored = AuthorizedMemberId::try_from(value.inner()).unwrap();
        assert_eq!(restored.into_inner(), member_id);
    }

    #[test]
    fn garbage_value_is_rejected() {
        assert!(AuthorizedMemberId::try_from("not-a-uuid".to_string()).is_err());
    }
}
