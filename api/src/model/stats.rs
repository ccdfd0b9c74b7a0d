use kernel::model::stats::SustainabilityStats;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityStatsResponse {
    pub total_items: i64,
    pub total_users: i64,
    pub total_exchanges: i64,
    pub co2_saved: i64,
}

impl From<SustainabilityStats> for SustainabilityStatsResponse {
    fn from(value: SustainabilityStats) -> Self {
        let SustainabilityStats {
            total_items,
            total_users,
            total_exchanges,
            co2_saved,
        } = value;
        Self {
            total_items,
            total_users,
            total_exchanges,
            co2_saved,
        }
    }
}
