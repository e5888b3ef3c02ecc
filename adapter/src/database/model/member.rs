use kernel::model::{id::MemberId, member::Member, role::Role};
use shared::error::AppError;
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct MemberRow {
    pub member_id: MemberId,
    pub username: String,
    pub name: String,
    pub phone: String,
    pub role: String,
}

impl TryFrom<MemberRow> for Member {
    type Error = AppError;

    fn try_from(value: MemberRow) -> Result<Self, Self::Error> {
        let MemberRow {
            member_id,
            username,
            name,
            phone,
            role,
        } = value;
        let role = Role::from_str(&role)
            .map_err(|e| AppError::ConversionEntityError(format!("role `{role}`: {e}")))?;
        Ok(Member {
            member_id,
            username,
            name,
            phone,
            role,
        })
    }
}

// ログイン時の照合に使う型
#[derive(sqlx::FromRow)]
pub struct MemberCredentialRow {
    pub member_id: MemberId,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_is_a_conversion_error() {
        let row = MemberRow {
            member_id: MemberId::new(),
            username: "username".into(),
            name: "name".into(),
            phone: "010-1234-5678".into(),
            role: "Owner".into(),
        };
        assert!(matches!(
            Member::try_from(row),
            Err(AppError::ConversionEntityError(_))
        ));
    }
}
