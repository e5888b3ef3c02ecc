use crate::model::id::MemberId;

pub struct CreateToken {
    pub member_id: MemberId,
    pub access_token: String,
}

impl CreateToken {
    pub fn new(member_id: MemberId) -> Self {
        let access_token = uuid::Uuid::new_v4().simple().to_string();
        Self {
            member_id,
            access_token,
        }
    }
}
