use garde::Validate;
use kernel::model::{
    id::MemberId,
    member::{event::CreateMember, Member},
    role::Role,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RoleName {
    Admin,
    User,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => Self::Admin,
            Role::User => Self::User,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    #[garde(length(min = 1))]
    username: String,
    #[garde(length(min = 1))]
    password: String,
    #[garde(length(min = 1))]
    name: String,
    #[garde(length(min = 1))]
    phone: String,
}

impl From<CreateMemberRequest> for CreateMember {
    fn from(value: CreateMemberRequest) -> Self {
        let CreateMemberRequest {
            username,
            password,
            name,
            phone,
        } = value;
        Self {
            username,
            password,
            name,
            phone,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: MemberId,
    pub username: String,
    pub name: String,
    pub phone: String,
    pub role: RoleName,
}

impl From<Member> for MemberResponse {
    fn from(value: Member) -> Self {
        let Member {
            member_id,
            username,
            name,
            phone,
            role,
        } = value;
        Self {
            id: member_id,
            username,
            name,
            phone,
            role: RoleName::from(role),
        }
    }
}
