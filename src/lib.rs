//! Fetch profile, rank, and award data of Trailhead users.
//!
//! The tbid and profile data are scraped from a user's profile page at
//! `https://trailblazer.me/id/<username>`, rank data and awards are requested
//! through the aura endpoint that the profile page itself uses.
//!
//! ```no_run
//! # async fn run() -> trailhead_scraper::Result<()> {
//! let rank = trailhead_scraper::fetch_rank_data("ecastelli", None).await?;
//! let awards = trailhead_scraper::fetch_awards("ecastelli", None, None).await?;
//!
//! assert_eq!(rank.earned_badge_total(), Some(awards.len() as u64));
//! # Ok(()) }
//! ```

#![deny(clippy::all, nonstandard_style, rust_2018_idioms)]

#[macro_use]
extern crate eyre;

#[macro_use]
extern crate tracing;

pub use self::{
    aura::AuraPayload,
    client::{Client, Transport},
    config::Config,
    error::{Error, Result},
    model::{Award, ProfileData, RankData},
    profile::Profile,
    trailhead::{Trailhead, PER_PAGE},
};

pub mod aura;
pub mod blocking;
pub mod client;
pub mod config;
mod error;
mod extract;
mod model;
mod profile;
mod trailhead;

/// Scrapes the tbid of a user from their profile page.
pub async fn fetch_identifier(username: &str) -> Result<Box<str>> {
    Trailhead::new().fetch_identifier(username).await
}

/// Scrapes the profile data of a user; see [`Trailhead::fetch_profile_data`].
pub async fn fetch_profile_data(username: &str, keep_picklists: bool) -> Result<ProfileData> {
    Trailhead::new()
        .fetch_profile_data(username, keep_picklists)
        .await
}

/// Requests the rank data of a user, scraping the tbid first if none is given.
pub async fn fetch_rank_data(username: &str, identifier: Option<&str>) -> Result<RankData> {
    Trailhead::new()
        .fetch_rank_data(username, identifier)
        .await
}

/// Requests all awards of a user, or only the first `limit` ones.
pub async fn fetch_awards(
    username: &str,
    identifier: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<Award>> {
    Trailhead::new()
        .fetch_awards(username, identifier, limit)
        .await
}
