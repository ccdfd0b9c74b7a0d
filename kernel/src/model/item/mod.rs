pub mod event;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

use crate::model::id::{ItemId, UserId};

/// Declared wear state of a shared garment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Condition {
    New,
    Excellent,
    #[default]
    Good,
    Fair,
}

#[derive(Debug, Clone)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub size: String,
    pub condition: Condition,
    pub images: Vec<String>,
    pub owner: Option<ItemOwner>,
    pub location: String,
    pub available: bool,
    pub tags: Vec<String>,
    pub sustainability_impact: i64,
    pub created_at: DateTime<Utc>,
}

/// Owner reference expanded for reads. `None` when the referenced
/// user record no longer resolves.
#[derive(Debug, Clone)]
pub struct ItemOwner {
    pub id: UserId,
    pub name: String,
}

/// Optional predicates applied to the available-items listing.
/// An absent field is a no-op, never a failure.
#[derive(Debug, Default)]
pub struct ItemFilter {
    pub category: Option<String>,
    pub location: Option<String>,
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_condition_uses_lowercase_string_forms() {
        assert_eq!(Condition::from_str("excellent").unwrap(), Condition::Excellent);
        assert_eq!(Condition::Fair.as_ref(), "fair");
        assert_eq!(Condition::default(), Condition::Good);
    }
}
