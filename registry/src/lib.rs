use std::sync::Arc;

use adapter::repository::{
    exchange::ExchangeRepositoryImpl, health::HealthCheckRepositoryImpl, item::ItemRepositoryImpl,
    stats::StatsRepositoryImpl, user::UserRepositoryImpl,
};
use adapter::store::RecordStore;
use kernel::repository::{
    exchange::ExchangeRepository, health::HealthCheckRepository, item::ItemRepository,
    stats::StatsRepository, user::UserRepository,
};

/// Capability bundle handed to every request handler as axum state.
#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    item_repository: Arc<dyn ItemRepository>,
    exchange_repository: Arc<dyn ExchangeRepository>,
    stats_repository: Arc<dyn StatsRepository>,
}

impl AppRegistry {
    pub fn new(store: RecordStore) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(store.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(store.clone()));
        let item_repository = Arc::new(ItemRepositoryImpl::new(store.clone()));
        let exchange_repository = Arc::new(ExchangeRepositoryImpl::new(store.clone()));
        let stats_repository = Arc::new(StatsRepositoryImpl::new(store));
        Self {
            health_check_repository,
            user_repository,
            item_repository,
            exchange_repository,
            stats_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn item_repository(&self) -> Arc<dyn ItemRepository> {
        self.item_repository.clone()
    }

    pub fn exchange_repository(&self) -> Arc<dyn ExchangeRepository> {
        self.exchange_repository.clone()
    }

    pub fn stats_repository(&self) -> Arc<dyn StatsRepository> {
        self.stats_repository.clone()
    }
}
