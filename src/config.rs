use std::time::Duration;

pub const BASE_URL: &str = "https://trailblazer.me";
pub const FWUID: &str = "dDIdorNC3N22LalQ5i3slQ";
pub const APP: &str = "c:ProfileApp";
pub const ACTION_DESCRIPTOR: &str = "aura://ApexActionController/ACTION$execute";

static USER_AGENT: &str = env!("CARGO_PKG_NAME");

/// Settings shared by every request of a [`Trailhead`](crate::Trailhead).
///
/// The default values target the production site.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: Box<str>,
    /// Framework build id sent as part of `aura.context`.
    pub fwuid: Box<str>,
    pub app: Box<str>,
    pub action_descriptor: Box<str>,
    /// Whether `aura.pageURI` is sent along with each payload.
    pub include_page_uri: bool,
    pub user_agent: Box<str>,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').into();

        self
    }

    pub fn with_fwuid(mut self, fwuid: impl Into<Box<str>>) -> Self {
        self.fwuid = fwuid.into();

        self
    }

    pub fn with_app(mut self, app: impl Into<Box<str>>) -> Self {
        self.app = app.into();

        self
    }

    pub fn with_action_descriptor(mut self, descriptor: impl Into<Box<str>>) -> Self {
        self.action_descriptor = descriptor.into();

        self
    }

    pub fn with_page_uri(mut self, include: bool) -> Self {
        self.include_page_uri = include;

        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<Box<str>>) -> Self {
        self.user_agent = user_agent.into();

        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);

        self
    }

    /// Path of a user's profile page, e.g. `/id/username`
    pub fn profile_path(username: &str) -> String {
        format!("/id/{username}")
    }

    pub fn profile_url(&self, username: &str) -> String {
        format!("{}{}", self.base_url, Self::profile_path(username))
    }

    pub fn aura_url(&self) -> String {
        format!("{}/aura", self.base_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.into(),
            fwuid: FWUID.into(),
            app: APP.into(),
            action_descriptor: ACTION_DESCRIPTOR.into(),
            include_page_uri: true,
            user_agent: USER_AGENT.into(),
            timeout: None,
        }
    }
}
