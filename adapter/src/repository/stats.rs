use async_trait::async_trait;
use derive_new::new;
use kernel::model::{exchange::ExchangeStatus, stats::SustainabilityStats};
use kernel::repository::stats::StatsRepository;
use shared::error::AppResult;

use crate::store::RecordStore;

/// Kilograms of CO2 attributed to each completed exchange.
const CO2_KG_PER_EXCHANGE: f64 = 2.3;

#[derive(new)]
pub struct StatsRepositoryImpl {
    db: RecordStore,
}

#[async_trait]
impl StatsRepository for StatsRepositoryImpl {
    async fn summarize(&self) -> AppResult<SustainabilityStats> {
        let total_items = self.db.items().read().await.len() as i64;
        let total_users = self.db.users().read().await.len() as i64;
        let total_exchanges = self
            .db
            .exchanges()
            .read()
            .await
            .iter()
            .filter(|row| row.status == ExchangeStatus::Completed)
            .count() as i64;

        Ok(SustainabilityStats {
            total_items,
            total_users,
            total_exchanges,
            co2_saved: (total_exchanges as f64 * CO2_KG_PER_EXCHANGE).round() as i64,
        })
    }
}
