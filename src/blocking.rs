//! Synchronous versions of the fetch operations.
//!
//! Each type owns a current-thread runtime and blocks on it, so none of this
//! may be used from within an async context.

use std::future::Future;

use tokio::runtime::{Builder as RuntimeBuilder, Runtime};

use crate::{
    client::{Client, Transport},
    config::Config,
    error::{Error, Result},
    model::{Award, ProfileData, RankData},
    profile::Profile as AsyncProfile,
    trailhead::Trailhead as AsyncTrailhead,
};

fn runtime() -> Result<Runtime> {
    RuntimeBuilder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Error::Runtime)
}

pub struct Trailhead<T = Client> {
    inner: AsyncTrailhead<T>,
    runtime: Runtime,
}

impl Trailhead {
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let client = Client::new(&config);

        Self::with_transport(client, config)
    }
}

impl<T: Transport> Trailhead<T> {
    pub fn with_transport(transport: T, config: Config) -> Result<Self> {
        Ok(Self {
            inner: AsyncTrailhead::with_transport(transport, config),
            runtime: runtime()?,
        })
    }

    fn block_on<F: Future>(&self, fut: F) -> F::Output {
        self.runtime.block_on(fut)
    }

    pub fn fetch_identifier(&self, username: &str) -> Result<Box<str>> {
        self.block_on(self.inner.fetch_identifier(username))
    }

    pub fn fetch_profile_data(&self, username: &str, keep_picklists: bool) -> Result<ProfileData> {
        self.block_on(self.inner.fetch_profile_data(username, keep_picklists))
    }

    pub fn fetch_rank_data(&self, username: &str, identifier: Option<&str>) -> Result<RankData> {
        self.block_on(self.inner.fetch_rank_data(username, identifier))
    }

    pub fn fetch_awards(
        &self,
        username: &str,
        identifier: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Award>> {
        self.block_on(self.inner.fetch_awards(username, identifier, limit))
    }
}

/// Blocking counterpart of [`crate::Profile`].
pub struct Profile<T = Client> {
    inner: AsyncProfile<T>,
    runtime: Runtime,
}

impl Profile {
    pub fn new(username: &str) -> Result<Self> {
        let config = Config::default();
        let client = Client::new(&config);

        Self::with_transport(client, config, username)
    }
}

impl<T: Transport> Profile<T> {
    pub fn with_transport(transport: T, config: Config, username: &str) -> Result<Self> {
        let runtime = runtime()?;
        let trailhead = AsyncTrailhead::with_transport(transport, config);
        let inner = runtime.block_on(AsyncProfile::with_trailhead(trailhead, username))?;

        Ok(Self { inner, runtime })
    }

    pub fn username(&self) -> &str {
        self.inner.username()
    }

    pub fn identifier(&self) -> &str {
        self.inner.identifier()
    }

    pub fn rank_data(&mut self) -> Result<&RankData> {
        self.runtime.block_on(self.inner.rank_data())
    }

    pub fn awards(&mut self) -> Result<&[Award]> {
        self.runtime.block_on(self.inner.awards())
    }

    pub fn profile_data(&mut self) -> Result<&ProfileData> {
        self.runtime.block_on(self.inner.profile_data())
    }

    pub fn first_name(&mut self) -> Result<Option<&str>> {
        self.runtime.block_on(self.inner.first_name())
    }

    pub fn last_name(&mut self) -> Result<Option<&str>> {
        self.runtime.block_on(self.inner.last_name())
    }

    pub fn cached_rank_data(&self) -> Option<&RankData> {
        self.inner.cached_rank_data()
    }

    pub fn cached_awards(&self) -> Option<&[Award]> {
        self.inner.cached_awards()
    }

    pub fn cached_profile_data(&self) -> Option<&ProfileData> {
        self.inner.cached_profile_data()
    }
}

pub fn fetch_identifier(username: &str) -> Result<Box<str>> {
    Trailhead::new()?.fetch_identifier(username)
}

pub fn fetch_profile_data(username: &str, keep_picklists: bool) -> Result<ProfileData> {
    Trailhead::new()?.fetch_profile_data(username, keep_picklists)
}

pub fn fetch_rank_data(username: &str, identifier: Option<&str>) -> Result<RankData> {
    Trailhead::new()?.fetch_rank_data(username, identifier)
}

pub fn fetch_awards(
    username: &str,
    identifier: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<Award>> {
    Trailhead::new()?.fetch_awards(username, identifier, limit)
}
