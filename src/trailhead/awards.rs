use serde_json::Value;

use crate::{
    aura::{self, BadgeParams},
    client::Transport,
    error::{Error, Result},
    model::Award,
};

use super::{take_pointer, Trailhead};

/// Amount of awards per request
pub const PER_PAGE: usize = 30;

const FILTER: &str = "All";

impl<T: Transport> Trailhead<T> {
    /// Requests the awards of a user page by page.
    ///
    /// If `identifier` is `None`, the tbid will be scraped first. If `limit`
    /// is `None`, the rank data will be requested to use the user's total
    /// amount of earned badges as limit.
    ///
    /// Pages are requested one after another and any failing page aborts the
    /// whole operation.
    pub async fn fetch_awards(
        &self,
        username: &str,
        identifier: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Award>> {
        let tbid = self.resolve_identifier(username, identifier).await?;

        let limit = match limit {
            Some(limit) => limit,
            None => {
                let rank = self.fetch_rank_data(username, Some(&*tbid)).await?;

                rank.earned_badge_total()
                    .and_then(|total| usize::try_from(total).ok())
                    .ok_or_else(|| Error::missing("EarnedBadgeTotal"))?
            }
        };

        let mut awards = Vec::new();

        for skip in (0..limit).step_by(PER_PAGE) {
            debug!("Requesting awards {skip}..{} of `{username}`", page_end(skip));

            let params = BadgeParams {
                user_id: &tbid,
                skip,
                per_page: PER_PAGE,
                filter: FILTER,
            };

            let mut body = self
                .send_profile_action(username, aura::FETCH_BADGES, &params)
                .await?;

            let Some(Value::Array(page)) = take_pointer(&mut body, "/value/0/EarnedAwards") else {
                return Err(Error::missing("value[0].EarnedAwards"));
            };

            if page.len() < PER_PAGE && page_end(skip) < limit {
                warn!(
                    "Received only {} awards at offset {skip} of `{username}`",
                    page.len()
                );
            }

            awards.extend(page);
        }

        // The last page is always requested in full
        awards.truncate(limit);

        Ok(awards)
    }
}

/// Exclusive end of the page starting at `skip`
fn page_end(skip: usize) -> usize {
    skip.saturating_add(PER_PAGE)
}
