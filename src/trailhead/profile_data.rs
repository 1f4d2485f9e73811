use crate::{client::Transport, error::Result, extract, model::ProfileData};

use super::Trailhead;

impl<T: Transport> Trailhead<T> {
    /// Scrapes the profile data embedded in the profile page.
    ///
    /// Unless `keep_picklists` is set, the rather large `pickLists` entry
    /// will be removed.
    pub async fn fetch_profile_data(
        &self,
        username: &str,
        keep_picklists: bool,
    ) -> Result<ProfileData> {
        let page = self.get_profile_page(username).await?;

        extract::profile_data(username, &page, keep_picklists)
    }
}
