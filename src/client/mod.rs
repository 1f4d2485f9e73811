use std::{future::Future, time::Duration};

use bytes::Bytes;
use eyre::{Context as _, Result};
use http_body_util::{BodyExt, Full};
use hyper::{
    body::Incoming,
    header::{CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT},
    Method, Request, Response,
};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client as HyperClient},
    rt::TokioExecutor,
};

use crate::config::Config;

pub use self::response::PageText;

mod response;

static FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// The two kinds of requests needed to talk to trailblazer.me.
///
/// [`Client`] is the real implementation; anything else can stand in for it,
/// e.g. to replay recorded responses.
pub trait Transport {
    /// Sends a GET request and returns the response body
    fn get(&self, url: &str) -> impl Future<Output = Result<Bytes>> + Send;

    /// Sends a POST request with an urlencoded form body and returns the response body
    fn post_form(&self, url: &str, form: String) -> impl Future<Output = Result<Bytes>> + Send;
}

type InnerClient = HyperClient<HttpsConnector<HttpConnector>, Full<Bytes>>;

#[derive(Clone)]
pub struct Client {
    client: InnerClient,
    user_agent: Box<str>,
    timeout: Option<Duration>,
}

impl Client {
    pub fn new(config: &Config) -> Self {
        let connector = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .enable_http2()
            .build();

        let client = HyperClient::builder(TokioExecutor::new()).build(connector);

        Self {
            client,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        }
    }

    /// Sends the request and collects the response body, both bounded by
    /// the timeout if one is configured.
    async fn send(&self, req: Request<Full<Bytes>>, url: &str) -> Result<Bytes> {
        let fut = self.receive(req, url);

        match self.timeout {
            Some(duration) => tokio::time::timeout(duration, fut)
                .await
                .map_err(|_| eyre!("timed out after {duration:?} when requesting url {url}"))?,
            None => fut.await,
        }
    }

    async fn receive(&self, req: Request<Full<Bytes>>, url: &str) -> Result<Bytes> {
        let response = self
            .client
            .request(req)
            .await
            .context("failed to receive response")?;

        Self::error_for_status(response, url).await
    }

    async fn error_for_status(response: Response<Incoming>, url: &str) -> Result<Bytes> {
        let status = response.status();

        ensure!(
            !(status.is_client_error() || status.is_server_error()),
            "failed with status code {status} when requesting url {url}"
        );

        response
            .into_body()
            .collect()
            .await
            .map(|collected| collected.to_bytes())
            .context("failed to extract response bytes")
    }
}

impl Transport for Client {
    async fn get(&self, url: &str) -> Result<Bytes> {
        trace!("sending GET request to url {url}");

        let req = Request::builder()
            .uri(url)
            .method(Method::GET)
            .header(USER_AGENT, &*self.user_agent)
            .body(Full::default())
            .context("failed to build GET request")?;

        self.send(req, url).await
    }

    async fn post_form(&self, url: &str, form: String) -> Result<Bytes> {
        trace!("sending POST request to url {url}");

        let req = Request::builder()
            .method(Method::POST)
            .uri(url)
            .header(USER_AGENT, &*self.user_agent)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(CONTENT_LENGTH, form.len())
            .body(Full::new(Bytes::from(form)))
            .context("failed to build POST request")?;

        self.send(req, url).await
    }
}
