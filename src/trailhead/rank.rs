use serde_json::Value;

use crate::{
    aura::{self, UserParams},
    client::Transport,
    error::{Error, Result},
    model::RankData,
};

use super::{take_pointer, Trailhead};

impl<T: Transport> Trailhead<T> {
    /// Requests the rank data of a user.
    ///
    /// If `identifier` is `None`, the tbid will be scraped first.
    pub async fn fetch_rank_data(
        &self,
        username: &str,
        identifier: Option<&str>,
    ) -> Result<RankData> {
        let tbid = self.resolve_identifier(username, identifier).await?;
        let params = UserParams { user_id: &tbid };

        let mut body = self
            .send_profile_action(username, aura::FETCH_DATA, &params)
            .await?;

        match take_pointer(&mut body, "/value/0/ProfileCounts/0") {
            Some(Value::Object(counts)) => Ok(RankData::from(counts)),
            _ => Err(Error::missing("value[0].ProfileCounts[0]")),
        }
    }
}
