use async_trait::async_trait;
use bon::Builder;
use reqwest::{header, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{
    error::ClientError,
    paths,
    session::{HttpSession, SessionLease},
};

/// Source of the raw news feed.
///
/// The default implementation talks to the public API; tests and offline tools
/// substitute their own (see [`crate::fixture::StaticNewsApi`]). Both fetch
/// operations return the undecoded JSON array.
#[async_trait]
pub trait NewsApi: Send + Sync {
    /// Fetch the feed on the calling thread.
    ///
    /// Implementations backed by `reqwest::blocking` must not be called from
    /// inside an async runtime.
    fn fetch_news_blocking(&self, longitude: &str, latitude: &str) -> Result<Value, ClientError>;

    async fn fetch_news(&self, longitude: &str, latitude: &str) -> Result<Value, ClientError>;

    /// Install a caller-owned session to be reused by [`NewsApi::fetch_news`].
    fn attach_session(&mut self, session: HttpSession);

    fn session(&self) -> Option<&HttpSession>;
}

/// HTTP client for the Krisinformation news endpoint.
///
/// The coordinates handed to the fetch operations are not sent; the endpoint
/// serves one global feed.
#[derive(Clone, Debug, Builder)]
pub struct KrisinformationApi {
    #[builder(into, default = paths::news_url())]
    endpoint: String,
    session: Option<HttpSession>,
}

impl KrisinformationApi {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self) -> Result<Url, ClientError> {
        Url::parse(&self.endpoint).map_err(|e| {
            ClientError::InvalidRequest(format!("Invalid endpoint '{}': {e}", self.endpoint))
        })
    }
}

impl Default for KrisinformationApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsApi for KrisinformationApi {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    fn fetch_news_blocking(&self, longitude: &str, latitude: &str) -> Result<Value, ClientError> {
        let url = self.url()?;
        let res = reqwest::blocking::Client::new()
            .get(url)
            .header(header::ACCEPT, mime::APPLICATION_JSON.to_string())
            .send()?
            .error_for_status()?;
        let body = String::from_utf8(res.bytes()?.to_vec())?;
        debug!(bytes = body.len(), "Received news feed");
        Ok(serde_json::from_str(&body)?)
    }

    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_news(&self, longitude: &str, latitude: &str) -> Result<Value, ClientError> {
        let url = self.url()?;
        let lease = SessionLease::acquire(self.session.as_ref());
        debug!(owned_session = lease.is_owned(), "Requesting news feed");

        let res = lease
            .client()?
            .get(url)
            .header(header::ACCEPT, mime::APPLICATION_JSON.to_string())
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::OK {
            warn!(%status, "Krisinformation API returned an error status");
            drop(lease);
            return Err(ClientError::api_error(status));
        }

        let body = res.bytes().await;
        drop(lease);
        let body = String::from_utf8(body?.to_vec())?;
        debug!(bytes = body.len(), "Received news feed");
        Ok(serde_json::from_str(&body)?)
    }

    fn attach_session(&mut self, session: HttpSession) {
        self.session = Some(session);
    }

    fn session(&self) -> Option<&HttpSession> {
        self.session.as_ref()
    }
}
