use async_trait::async_trait;
use kernel::repository::health::HealthCheckRepository;

pub struct InMemoryHealthCheckRepository;

#[async_trait]
impl HealthCheckRepository for InMemoryHealthCheckRepository {
    async fn check_db(&self) -> bool {
        true
    }
}
