use crate::{
    client::{Client, Transport},
    error::{Error, Result},
    model::{Award, ProfileData, RankData},
    trailhead::Trailhead,
};

/// A user's profile that remembers everything it fetched.
///
/// The tbid is resolved on construction; rank data, awards, and profile data
/// are requested on first access and cached afterwards.
pub struct Profile<T = Client> {
    trailhead: Trailhead<T>,
    username: Box<str>,
    identifier: Box<str>,
    rank_data: Option<RankData>,
    awards: Option<Vec<Award>>,
    profile_data: Option<ProfileData>,
}

impl Profile {
    /// Scrapes the tbid of the user and fails if it can't be found.
    pub async fn new(username: &str) -> Result<Self> {
        Self::with_trailhead(Trailhead::new(), username).await
    }
}

impl<T: Transport> Profile<T> {
    /// Scrapes the tbid of the user and fails if it can't be found.
    pub async fn with_trailhead(trailhead: Trailhead<T>, username: &str) -> Result<Self> {
        let identifier = trailhead.fetch_identifier(username).await?;

        Ok(Self::with_identifier(trailhead, username, identifier))
    }

    /// Uses an already known tbid without requesting the profile page.
    pub fn with_identifier(
        trailhead: Trailhead<T>,
        username: &str,
        identifier: impl Into<Box<str>>,
    ) -> Self {
        Self {
            trailhead,
            username: username.into(),
            identifier: identifier.into(),
            rank_data: None,
            awards: None,
            profile_data: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn cached_rank_data(&self) -> Option<&RankData> {
        self.rank_data.as_ref()
    }

    pub fn cached_awards(&self) -> Option<&[Award]> {
        self.awards.as_deref()
    }

    pub fn cached_profile_data(&self) -> Option<&ProfileData> {
        self.profile_data.as_ref()
    }

    pub async fn rank_data(&mut self) -> Result<&RankData> {
        let rank_data = match self.rank_data.take() {
            Some(rank_data) => rank_data,
            None => {
                self.trailhead
                    .fetch_rank_data(&self.username, Some(&*self.identifier))
                    .await?
            }
        };

        Ok(self.rank_data.insert(rank_data))
    }

    /// All awards of the user; the rank data is requested first if needed.
    pub async fn awards(&mut self) -> Result<&[Award]> {
        let awards = match self.awards.take() {
            Some(awards) => awards,
            None => {
                let limit = self
                    .rank_data()
                    .await?
                    .earned_badge_total()
                    .and_then(|total| usize::try_from(total).ok())
                    .ok_or_else(|| Error::missing("EarnedBadgeTotal"))?;

                self.trailhead
                    .fetch_awards(&self.username, Some(&*self.identifier), Some(limit))
                    .await?
            }
        };

        Ok(self.awards.insert(awards))
    }

    /// Profile data without pick lists.
    pub async fn profile_data(&mut self) -> Result<&ProfileData> {
        let profile_data = match self.profile_data.take() {
            Some(profile_data) => profile_data,
            None => {
                self.trailhead
                    .fetch_profile_data(&self.username, false)
                    .await?
            }
        };

        Ok(self.profile_data.insert(profile_data))
    }

    pub async fn first_name(&mut self) -> Result<Option<&str>> {
        self.profile_data().await.map(ProfileData::first_name)
    }

    pub async fn last_name(&mut self) -> Result<Option<&str>> {
        self.profile_data().await.map(ProfileData::last_name)
    }
}
