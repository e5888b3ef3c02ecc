use strum::{AsRefStr, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Default)]
pub enum Role {
    Admin,
    #[default]
    User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn stored_names_round_trip() {
        assert_eq!(Role::Admin.as_ref(), "Admin");
        assert_eq!(Role::from_str("User").unwrap(), Role::User);
        assert!(Role::from_str("Guest").is_err());
    }
}
