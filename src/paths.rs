pub const BASE_URL: &str = "http://api.krisinformation.se/";
pub const NEWS_PATH: &str = "v3/news";

/// Full URL of the news feed.
pub fn news_url() -> String {
    format!("{BASE_URL}{NEWS_PATH}")
}
