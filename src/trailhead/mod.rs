use serde_json::Value;

use crate::{
    aura::{self, AuraPayload},
    client::{Client, PageText, Transport},
    config::Config,
    error::Result,
};

pub use self::awards::PER_PAGE;

mod awards;
mod identifier;
mod profile_data;
mod rank;

/// Performs the requests of all fetch operations.
///
/// Every operation is a stateless round trip; see [`Profile`](crate::Profile)
/// for a wrapper that remembers results.
#[derive(Clone)]
pub struct Trailhead<T = Client> {
    transport: T,
    config: Config,
}

impl Trailhead {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let client = Client::new(&config);

        Self::with_transport(client, config)
    }
}

impl Default for Trailhead {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Trailhead<T> {
    pub fn with_transport(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn get_profile_page(&self, username: &str) -> Result<PageText> {
        let url = self.config.profile_url(username);

        let bytes = self
            .transport
            .get(&url)
            .await
            .map_err(|err| err.wrap_err(format!("failed to get profile page of `{username}`")))?;

        PageText::new(bytes).map_err(From::from)
    }

    fn payload(&self, username: &str) -> AuraPayload<'_> {
        let page_uri = self
            .config
            .include_page_uri
            .then(|| Config::profile_path(username));

        AuraPayload::new(&self.config).page_uri(page_uri)
    }

    /// Sends a payload containing a single profile service action
    /// and returns the decoded body of the response.
    async fn send_profile_action<P>(&self, username: &str, method: &str, params: &P) -> Result<Value>
    where
        P: serde::Serialize,
    {
        let mut payload = self.payload(username);
        payload.add_action(aura::PROFILE_SERVICE, method, params)?;
        let form = payload.to_form()?;

        let bytes = self
            .transport
            .post_form(&self.config.aura_url(), form)
            .await
            .map_err(|err| err.wrap_err(format!("failed to send aura action `{method}`")))?;

        aura::unwrap_body(&bytes)
    }

    /// Returns the given tbid or scrapes it from the profile page
    async fn resolve_identifier(&self, username: &str, identifier: Option<&str>) -> Result<Box<str>> {
        match identifier {
            Some(tbid) => Ok(tbid.into()),
            None => self.fetch_identifier(username).await,
        }
    }
}

/// Takes the value at a JSON pointer out of a response body
fn take_pointer(body: &mut Value, pointer: &str) -> Option<Value> {
    body.pointer_mut(pointer).map(Value::take)
}
