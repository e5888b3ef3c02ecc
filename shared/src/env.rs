use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// 実行環境を判定する。`ENV` が未設定のときはビルドプロファイルに従う
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    parse(env::var("ENV").ok().as_deref(), default_env)
}

fn parse(value: Option<&str>, default_env: Environment) -> Environment {
    match value {
        Some("development") => Environment::Development,
        Some("production") => Environment::Production,
        _ => default_env,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_value_overrides_build_profile() {
        assert_eq!(
            parse(Some("production"), Environment::Development),
            Environment::Production
        );
        assert_eq!(
            parse(Some("development"), Environment::Production),
            Environment::Development
        );
    }

    #[test]
    fn unknown_value_falls_back_to_default() {
        assert_eq!(
            parse(Some("staging"), Environment::Development),
            Environment::Development
        );
        assert_eq!(parse(None, Environment::Production), Environment::Production);
    }
}
