mod coordinate;
mod news;

pub use coordinate::Coordinate;
pub use news::{Area, CoordinateObject, Link, NewsItem};
