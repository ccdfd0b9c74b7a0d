/// Community-wide counters recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SustainabilityStats {
    pub total_items: i64,
    pub total_users: i64,
    /// Count of exchanges that reached the completed status.
    pub total_exchanges: i64,
    /// Kilograms of CO2 attributed to completed exchanges.
    pub co2_saved: i64,
}
