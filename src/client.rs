use std::fmt;

use bon::bon;
use tracing::debug;

use crate::{
    error::ClientError,
    http::{KrisinformationApi, NewsApi},
    models::Coordinate,
    session::HttpSession,
};

/// Entry point for reading the Krisinformation news feed.
///
/// Holds the normalised query coordinates and the [`NewsApi`] used to fetch the
/// raw feed. See [`Krisinformation::news`] and [`Krisinformation::news_blocking`].
pub struct Krisinformation {
    pub(crate) longitude: Coordinate,
    pub(crate) latitude: Coordinate,
    pub(crate) api: Box<dyn NewsApi>,
}

#[bon]
impl Krisinformation {
    /// Build a client.
    ///
    /// Coordinates are accepted as strings or `f64` and rounded to six decimals.
    /// Without an `api` the public HTTP endpoint is used. A `session` is
    /// installed into whichever `api` ends up being used; it stays owned by the
    /// caller and is never closed by this crate.
    #[builder]
    pub fn new<Lon, Lat>(
        longitude: Lon,
        latitude: Lat,
        session: Option<HttpSession>,
        api: Option<Box<dyn NewsApi>>,
    ) -> Result<Self, ClientError>
    where
        Lon: TryInto<Coordinate, Error = ClientError>,
        Lat: TryInto<Coordinate, Error = ClientError>,
    {
        let longitude = longitude.try_into()?;
        let latitude = latitude.try_into()?;
        let mut api = api.unwrap_or_else(|| Box::new(KrisinformationApi::new()));

        if let Some(session) = session {
            debug!("Attaching caller-owned session");
            api.attach_session(session);
        }

        Ok(Self {
            longitude,
            latitude,
            api,
        })
    }
}

impl Krisinformation {
    /// Client for the public endpoint with no attached session.
    pub fn from_coordinates<Lon, Lat>(longitude: Lon, latitude: Lat) -> Result<Self, ClientError>
    where
        Lon: TryInto<Coordinate, Error = ClientError>,
        Lat: TryInto<Coordinate, Error = ClientError>,
    {
        Self::builder()
            .longitude(longitude)
            .latitude(latitude)
            .build()
    }

    pub fn longitude(&self) -> &str {
        self.longitude.as_str()
    }

    pub fn latitude(&self) -> &str {
        self.latitude.as_str()
    }

    pub fn api(&self) -> &dyn NewsApi {
        self.api.as_ref()
    }
}

impl fmt::Debug for Krisinformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Krisinformation")
            .field("longitude", &self.longitude)
            .field("latitude", &self.latitude)
            .field("session", &self.api.session())
            .finish_non_exhaustive()
    }
}
