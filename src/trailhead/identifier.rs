use crate::{client::Transport, error::Result, extract};

use super::Trailhead;

impl<T: Transport> Trailhead<T> {
    /// Scrapes the tbid of a user from their profile page.
    pub async fn fetch_identifier(&self, username: &str) -> Result<Box<str>> {
        let page = self.get_profile_page(username).await?;
        let tbid = extract::tbid(username, &page)?;
        debug!("Resolved tbid {tbid} for `{username}`");

        Ok(tbid)
    }
}
