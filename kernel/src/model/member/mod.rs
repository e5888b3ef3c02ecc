use crate::model::{id::MemberId, role::Role};
pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub member_id: MemberId,
    pub username: String,
    pub name: String,
    pub phone: String,
    pub role: Role,
}

impl Member {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
