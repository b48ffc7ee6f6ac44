use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::{
    client::Krisinformation,
    error::{ClientError, DataError},
    models::NewsItem,
    serde_utils::value_to_string,
};

/// Keys every element of the feed must carry.
pub const NEWS_FIELDS: [&str; 17] = [
    "Identifier",
    "PushMessage",
    "Updated",
    "Published",
    "Headline",
    "Preamble",
    "BodyText",
    "ImageLink",
    "Links",
    "Area",
    "Web",
    "Language",
    "Event",
    "SenderName",
    "Push",
    "BodyLinks",
    "SourceID",
];

/// Map the raw feed into [`NewsItem`]s, keeping API order.
///
/// The first element that lacks a required key aborts the whole mapping; no
/// partial list is returned.
pub fn parse_news(raw: &Value) -> Result<Vec<NewsItem>, ClientError> {
    let items = raw
        .as_array()
        .ok_or_else(|| DataError::invalid_type("news", "array"))?;

    let news = items
        .iter()
        .map(NewsItem::from_json)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = news.len(), "Mapped news items");
    Ok(news)
}

impl NewsItem {
    pub(crate) fn from_json(item: &Value) -> Result<Self, DataError> {
        let item = item
            .as_object()
            .ok_or_else(|| DataError::invalid_type("news item", "object"))?;

        Ok(Self {
            identifier: text(item, "Identifier")?,
            push_message: text(item, "PushMessage")?,
            updated: text(item, "Updated")?,
            published: text(item, "Published")?,
            headline: text(item, "Headline")?,
            preamble: text(item, "Preamble")?,
            body_text: text(item, "BodyText")?,
            image_link: text(item, "ImageLink")?,
            links: list(item, "Links")?,
            area: list(item, "Area")?,
            web: text(item, "Web")?,
            language: text(item, "Language")?,
            event: text(item, "Event")?,
            sender_name: text(item, "SenderName")?,
            push: text(item, "Push")?,
            body_links: list(item, "BodyLinks")?,
            source_id: text(item, "SourceID")?,
        })
    }
}

fn field<'a>(item: &'a Map<String, Value>, key: &'static str) -> Result<&'a Value, DataError> {
    item.get(key).ok_or_else(|| DataError::missing_field(key))
}

/// Any scalar is kept in its string form; see [`value_to_string`].
fn text(item: &Map<String, Value>, key: &'static str) -> Result<String, DataError> {
    Ok(value_to_string(field(item, key)?))
}

fn list<T: DeserializeOwned>(item: &Map<String, Value>, key: &'static str) -> Result<Vec<T>, DataError> {
    match field(item, key)? {
        Value::Null => Ok(Vec::new()),
        value => serde_json::from_value(value.clone()).map_err(|e| DataError::parse_error(key, e.to_string())),
    }
}

impl Krisinformation {
    /// Fetch and map the feed on the calling thread.
    #[instrument(skip(self), fields(longitude = %self.longitude, latitude = %self.latitude))]
    pub fn news_blocking(&self) -> Result<Vec<NewsItem>, ClientError> {
        let raw = self
            .api
            .fetch_news_blocking(self.longitude.as_str(), self.latitude.as_str())?;
        parse_news(&raw)
    }

    /// Fetch and map the feed without blocking the executor.
    #[instrument(skip(self), fields(longitude = %self.longitude, latitude = %self.latitude))]
    pub async fn news(&self) -> Result<Vec<NewsItem>, ClientError> {
        let raw = self
            .api
            .fetch_news(self.longitude.as_str(), self.latitude.as_str())
            .await?;
        parse_news(&raw)
    }
}
