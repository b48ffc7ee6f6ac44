use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::serde_utils::{optional_string_from_any, string_from_any};

/// One news or alert entry from the Krisinformation feed.
///
/// Only built by the feed mapper. Field names on the wire are PascalCase;
/// serialising a `NewsItem` yields the same shape the API returned.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewsItem {
    pub(crate) identifier: String,
    pub(crate) push_message: String,
    pub(crate) updated: String,
    pub(crate) published: String,
    pub(crate) headline: String,
    pub(crate) preamble: String,
    pub(crate) body_text: String,
    pub(crate) image_link: String,
    pub(crate) links: Vec<Link>,
    pub(crate) area: Vec<Area>,
    pub(crate) web: String,
    pub(crate) language: String,
    pub(crate) event: String,
    pub(crate) sender_name: String,
    pub(crate) push: String,
    pub(crate) body_links: Vec<Link>,
    #[serde(rename = "SourceID")]
    pub(crate) source_id: String,
}

impl NewsItem {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn push_message(&self) -> &str {
        &self.push_message
    }

    /// Last update time exactly as sent by the API (ISO-8601).
    pub fn updated(&self) -> &str {
        &self.updated
    }

    /// Publication time exactly as sent by the API (ISO-8601).
    pub fn published(&self) -> &str {
        &self.published
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// HTML body.
    pub fn body_text(&self) -> &str {
        &self.body_text
    }

    pub fn image_link(&self) -> &str {
        &self.image_link
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn area(&self) -> &[Area] {
        &self.area
    }

    pub fn web(&self) -> &str {
        &self.web
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    /// `"True"` or `"False"`, kept in its string form.
    pub fn push(&self) -> &str {
        &self.push
    }

    pub fn body_links(&self) -> &[Link] {
        &self.body_links
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn updated_at(&self) -> Result<DateTime<FixedOffset>, DataError> {
        parse_timestamp("Updated", &self.updated)
    }

    pub fn published_at(&self) -> Result<DateTime<FixedOffset>, DataError> {
        parse_timestamp("Published", &self.published)
    }
}

fn parse_timestamp(entity: &'static str, raw: &str) -> Result<DateTime<FixedOffset>, DataError> {
    DateTime::parse_from_rfc3339(raw).map_err(|e| DataError::parse_error(entity, format!("{raw}: {e}")))
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Link {
    #[serde(default, deserialize_with = "string_from_any")]
    pub text: String,
    #[serde(default, deserialize_with = "string_from_any")]
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Area {
    #[serde(rename = "Type", default, deserialize_with = "string_from_any")]
    pub area_type: String,
    #[serde(default, deserialize_with = "string_from_any")]
    pub description: String,
    /// `"lon,lat altitude"` as sent by the API.
    #[serde(default, deserialize_with = "string_from_any")]
    pub coordinate: String,
    #[serde(default)]
    pub coordinate_object: Option<CoordinateObject>,
    #[serde(default)]
    pub geometry_information: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoordinateObject {
    #[serde(default, deserialize_with = "optional_string_from_any")]
    pub latitude: Option<String>,
    #[serde(default, deserialize_with = "optional_string_from_any")]
    pub longitude: Option<String>,
    #[serde(default, deserialize_with = "optional_string_from_any")]
    pub altitude: Option<String>,
}
