use std::sync::Arc;

use adapter::redis::RedisClient;
use adapter::repository::{
    auth::AuthRepositoryImpl, health::HealthCheckRepositoryImpl, member::MemberRepositoryImpl,
    reservation::ReservationRepositoryImpl, schedule::ScheduleRepositoryImpl,
    theme::ThemeRepositoryImpl,
};
use adapter::database::ConnectionPool;
use kernel::repository::{
    auth::AuthRepository, health::HealthCheckRepository, member::MemberRepository,
    reservation::ReservationRepository, schedule::ScheduleRepository, theme::ThemeRepository,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    member_repository: Arc<dyn MemberRepository>,
    theme_repository: Arc<dyn ThemeRepository>,
    schedule_repository: Arc<dyn ScheduleRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>, app_config: &AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let member_repository = Arc::new(MemberRepositoryImpl::new(pool.clone()));
        let theme_repository = Arc::new(ThemeRepositoryImpl::new(pool.clone()));
        let schedule_repository = Arc::new(ScheduleRepositoryImpl::new(pool.clone()));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            auth_repository,
            member_repository,
            theme_repository,
            schedule_repository,
            reservation_repository,
        }
    }

    /// すべてのリポジトリがメモリ上の同じテーブルを共有するレジストリ
    #[cfg(feature = "test-utils")]
    pub fn in_memory() -> Self {
        use adapter::in_memory::{
            InMemoryAuthRepository, InMemoryDatabase, InMemoryHealthCheckRepository,
            InMemoryMemberRepository, InMemoryReservationRepository, InMemoryScheduleRepository,
            InMemoryThemeRepository,
        };

        let db = InMemoryDatabase::new();
        Self {
            health_check_repository: Arc::new(InMemoryHealthCheckRepository),
            auth_repository: Arc::new(InMemoryAuthRepository::new(db.clone())),
            member_repository: Arc::new(InMemoryMemberRepository::new(db.clone())),
            theme_repository: Arc::new(InMemoryThemeRepository::new(db.clone())),
            schedule_repository: Arc::new(InMemoryScheduleRepository::new(db.clone())),
            reservation_repository: Arc::new(InMemoryReservationRepository::new(db)),
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn member_repository(&self) -> Arc<dyn MemberRepository> {
        self.member_repository.clone()
    }

    pub fn theme_repository(&self) -> Arc<dyn ThemeRepository> {
        self.theme_repository.clone()
    }

    pub fn schedule_repository(&self) -> Arc<dyn ScheduleRepository> {
        self.schedule_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }
}
