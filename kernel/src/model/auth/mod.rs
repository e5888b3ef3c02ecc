pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);

impl AccessToken {
    /// `Authorization` ヘッダの値からトークンを取り出す。
    /// `Bearer ` で始まらないもの、空白だけのものは受け付けない
    pub fn from_bearer(header_value: &str) -> Option<Self> {
        let token = header_value.trim().strip_prefix("Bearer ")?.trim();
        if token.is_empty() {
            return None;
        }
        Some(Self(token.to_string()))
    }
}
