//! Client for the Swedish Krisinformation news API.
//!
//! ```no_run
//! # async fn run() -> Result<(), krisinformation::ClientError> {
//! use krisinformation::prelude::*;
//!
//! let client = Krisinformation::from_coordinates("17.041", "62.34198")?;
//! for item in client.news().await? {
//!     println!("{} {}", item.published(), item.headline());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod fixture;
pub mod http;
pub mod models;
pub mod paths;
mod serde_utils;
pub mod session;

pub use api::news::parse_news;
pub use client::Krisinformation;
pub use error::{ClientError, DataError};
pub use http::{KrisinformationApi, NewsApi};
pub use models::{Area, Coordinate, CoordinateObject, Link, NewsItem};
pub use session::HttpSession;

pub mod prelude {
    pub use crate::client::Krisinformation;
    pub use crate::error::ClientError;
    pub use crate::http::{KrisinformationApi, NewsApi};
    pub use crate::models::NewsItem;
    pub use crate::session::HttpSession;
}
