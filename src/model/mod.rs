pub use self::{profile_data::ProfileData, rank::RankData};

pub type Award = serde_json::Value;

mod profile_data;
mod rank;
