pub use self::{
    payload::{AuraPayload, BadgeParams, UserParams},
    response::unwrap_body,
};

mod payload;
mod response;

pub const PROFILE_SERVICE: &str = "TrailheadProfileService";
pub const FETCH_DATA: &str = "fetchTrailheadData";
pub const FETCH_BADGES: &str = "fetchTrailheadBadges";
