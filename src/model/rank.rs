use serde::Serialize;
use serde_json::{Map, Value};

/// Aggregate counters of a user's profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankData(Map<String, Value>);

impl RankData {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Amount of awards the user earned which is also the amount
    /// of records that can be paginated through.
    pub fn earned_badge_total(&self) -> Option<u64> {
        self.0.get("EarnedBadgeTotal")?.as_u64()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for RankData {
    #[inline]
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
