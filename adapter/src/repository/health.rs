use async_trait::async_trait;
use derive_new::new;
use kernel::repository::health::HealthCheckRepository;

use crate::store::RecordStore;

#[derive(new)]
pub struct HealthCheckRepositoryImpl {
    db: RecordStore,
}

#[async_trait]
impl HealthCheckRepository for HealthCheckRepositoryImpl {
    async fn check_store(&self) -> bool {
        // Acquiring a read lock is the whole probe for the in-memory store.
        let _ = self.db.users().read().await;
        true
    }
}
