//! Offline [`NewsApi`] that replays a fixed payload.
//!
//! ```
//! use krisinformation::{fixture::StaticNewsApi, Krisinformation};
//! use serde_json::json;
//!
//! let api = StaticNewsApi::new(json!([]));
//! let client = Krisinformation::builder()
//!     .longitude("17.041")
//!     .latitude("62.34198")
//!     .api(Box::new(api))
//!     .build()
//!     .unwrap();
//! assert!(client.news_blocking().unwrap().is_empty());
//! ```

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::{error::ClientError, http::NewsApi, session::HttpSession};

#[derive(Clone, Debug)]
pub struct StaticNewsApi {
    payload: Value,
    session: Option<HttpSession>,
}

impl StaticNewsApi {
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            session: None,
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ClientError> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }
}

#[async_trait]
impl NewsApi for StaticNewsApi {
    fn fetch_news_blocking(&self, longitude: &str, latitude: &str) -> Result<Value, ClientError> {
        debug!(longitude, latitude, "Replaying static news payload");
        Ok(self.payload.clone())
    }

    async fn fetch_news(&self, longitude: &str, latitude: &str) -> Result<Value, ClientError> {
        self.fetch_news_blocking(longitude, latitude)
    }

    fn attach_session(&mut self, session: HttpSession) {
        self.session = Some(session);
    }

    fn session(&self) -> Option<&HttpSession> {
        self.session.as_ref()
    }
}
