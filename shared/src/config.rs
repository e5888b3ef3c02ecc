use anyhow::{Context, Result};

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub admin: AdminConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST")?,
            port: std::env::var("DATABASE_PORT")?
                .parse()
                .context("DATABASE_PORT must be a port number")?,
            username: std::env::var("DATABASE_USERNAME")?,
            password: std::env::var("DATABASE_PASSWORD")?,
            database: std::env::var("DATABASE_NAME")?,
        };
        let redis = RedisConfig {
            host: std::env::var("REDIS_HOST")?,
            port: std::env::var("REDIS_PORT")?
                .parse()
                .context("REDIS_PORT must be a port number")?,
        };
        let auth = AuthConfig {
            ttl: std::env::var("AUTH_TOKEN_TTL")?
                .parse()
                .context("AUTH_TOKEN_TTL must be seconds")?,
        };
        // 管理者アカウントは起動時に作成される
        let admin = AdminConfig {
            username: env_or("ADMIN_USERNAME", "admin"),
            password: env_or("ADMIN_PASSWORD", "admin"),
        };
        let server = ServerConfig {
            port: env_or("PORT", "8080")
                .parse()
                .context("PORT must be a port number")?,
        };
        Ok(Self {
            database,
            redis,
            auth,
            admin,
            server,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct AuthConfig {
    pub ttl: u64,
}

pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

pub struct ServerConfig {
    pub port: u16,
}
