#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use bytes::Bytes;
use eyre::Result;
use serde_json::{json, Value};
use trailhead_scraper::{Config, Trailhead, Transport};

pub const USERNAME: &str = "ecastelli";
pub const INCORRECT_USERNAME: &str = "incorrect-username";
pub const TBID: &str = "0051I000004UgTlQAK";
pub const INCORRECT_TBID: &str = "incorrect-tbid";
pub const BASE_URL: &str = "https://trailblazer.test";
pub const TOTAL: usize = 97;

/// A request as it was received by [`FakeSite`].
#[derive(Clone, Debug)]
pub struct Received {
    pub url: String,
    /// Decoded form fields of POST requests
    pub form: Option<HashMap<String, String>>,
}

impl Received {
    /// `message.actions[0].params` of an aura request
    pub fn action(&self) -> Value {
        let form = self.form.as_ref().expect("not a POST request");
        let message: Value = serde_json::from_str(&form["message"]).unwrap();

        message["actions"][0]["params"].clone()
    }
}

#[derive(Default)]
struct Inner {
    received: Mutex<Vec<Received>>,
    failing_skip: Option<usize>,
    malformed_body: bool,
}

/// Serves the profile page of [`USERNAME`] and answers aura requests like
/// the real site, holding [`TOTAL`] awards.
#[derive(Clone, Default)]
pub struct FakeSite {
    inner: Arc<Inner>,
}

impl FakeSite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers the awards page at offset `skip` with an error state
    pub fn failing_at(skip: usize) -> Self {
        let inner = Inner {
            failing_skip: Some(skip),
            ..Default::default()
        };

        Self {
            inner: Arc::new(inner),
        }
    }

    /// Sends bodies that are not valid JSON
    pub fn malformed() -> Self {
        let inner = Inner {
            malformed_body: true,
            ..Default::default()
        };

        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn received(&self) -> Vec<Received> {
        self.inner.received.lock().unwrap().clone()
    }

    pub fn page_requests(&self) -> usize {
        self.received().iter().filter(|req| req.form.is_none()).count()
    }

    pub fn aura_requests(&self) -> Vec<Received> {
        self.received()
            .into_iter()
            .filter(|req| req.form.is_some())
            .collect()
    }

    fn page(username: &str) -> String {
        if username != USERNAME {
            return "<html><body><h1>Looks like this profile doesn't exist.</h1></body></html>"
                .to_owned();
        }

        let profile = json!({
            "profileUser": {
                "Id": TBID,
                "FirstName": "Emily",
                "LastName": "Castelli",
                "Title": "Developer </b>",
            },
            "pickLists": { "countries": ["a", "b", "c"] },
        });

        let literal = serde_json::to_string(&profile.to_string()).unwrap();

        format!(
            "<!DOCTYPE html><html><head>\
            <script>window.__ctx = \"{{\\\"photoUrl\\\":\\\"/sobjects/User/{TBID}\\\"}}\";</script>\
            <script>var profileData = JSON.parse({literal});</script>\
            </head><body></body></html>"
        )
    }

    fn aura(&self, form: &HashMap<String, String>) -> Value {
        let message: Value = serde_json::from_str(&form["message"]).unwrap();
        let action = &message["actions"][0]["params"];
        let params = &action["params"];

        if params["userId"] != TBID {
            return json!({
                "actions": [{
                    "state": "ERROR",
                    "error": [{ "message": "Invalid user id", "exceptionType": "Apex" }]
                }]
            });
        }

        let body = match action["method"].as_str() {
            Some("fetchTrailheadData") => json!({
                "value": [{
                    "ProfileCounts": [{
                        "Id": TBID,
                        "EarnedBadgeTotal": TOTAL,
                        "EarnedPointTotal": 84_225,
                    }]
                }]
            }),
            Some("fetchTrailheadBadges") => {
                let skip = params["skip"].as_u64().unwrap() as usize;
                let per_page = params["perPage"].as_u64().unwrap() as usize;

                if self.inner.failing_skip == Some(skip) {
                    return json!({
                        "actions": [{ "state": "ERROR", "error": [{ "message": "Server busy" }] }]
                    });
                }

                let awards: Vec<_> = (skip..TOTAL.min(skip + per_page))
                    .map(|i| json!({ "Id": format!("award-{i}"), "Type": "Module" }))
                    .collect();

                json!({ "value": [{ "EarnedAwards": awards }] })
            }
            other => panic!("unexpected method {other:?}"),
        };

        let body = if self.inner.malformed_body {
            "{\"value\": [".to_owned()
        } else {
            body.to_string()
        };

        json!({
            "actions": [{
                "id": "123;a",
                "state": "SUCCESS",
                "returnValue": { "returnValue": { "body": body }, "cacheable": false },
                "error": []
            }],
            "context": { "mode": "PROD" }
        })
    }
}

impl Transport for FakeSite {
    async fn get(&self, url: &str) -> Result<Bytes> {
        self.inner.received.lock().unwrap().push(Received {
            url: url.to_owned(),
            form: None,
        });

        let username = url
            .strip_prefix(&format!("{BASE_URL}/id/"))
            .ok_or_else(|| eyre::eyre!("unknown url {url}"))?;

        Ok(Bytes::from(Self::page(username)))
    }

    async fn post_form(&self, url: &str, form: String) -> Result<Bytes> {
        let form: HashMap<String, String> = serde_urlencoded::from_str(&form)?;

        self.inner.received.lock().unwrap().push(Received {
            url: url.to_owned(),
            form: Some(form.clone()),
        });

        eyre::ensure!(url == format!("{BASE_URL}/aura"), "unknown url {url}");

        Ok(Bytes::from(serde_json::to_vec(&self.aura(&form))?))
    }
}

pub fn config() -> Config {
    Config::default().with_base_url(BASE_URL)
}

pub fn trailhead(site: &FakeSite) -> Trailhead<FakeSite> {
    Trailhead::with_transport(site.clone(), config())
}
