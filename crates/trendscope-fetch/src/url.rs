//! Google Trends endpoint and payload construction.

use trendscope_types::DateWindow;

/// Base URL for Google Trends.
pub const BASE_URL: &str = "https://trends.google.com";

/// Path of the explore endpoint, which hands out widget tokens.
pub const EXPLORE_PATH: &str = "/trends/api/explore";

/// Path of the interest-over-time widget data endpoint.
pub const MULTILINE_PATH: &str = "/trends/api/widgetdata/multiline";

/// Builds the landing page URL used to obtain a session cookie.
///
/// The `geo` parameter is the region suffix of the host language (`en-US` -> `US`).
///
/// # Example
///
/// ```
/// use trendscope_fetch::url::home_url;
///
/// assert_eq!(home_url("https://trends.google.com", "en-US"), "https://trends.google.com/?geo=US");
/// ```
#[must_use]
pub fn home_url(base: &str, hl: &str) -> String {
    let geo = hl.rsplit('-').next().unwrap_or(hl);
    format!("{}/?geo={}", base.trim_end_matches('/'), geo)
}

/// Builds the explore endpoint URL.
#[must_use]
pub fn explore_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), EXPLORE_PATH)
}

/// Builds the interest-over-time endpoint URL.
#[must_use]
pub fn multiline_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), MULTILINE_PATH)
}

/// Builds the `req` payload for the explore endpoint: one keyword, worldwide,
/// all categories, web search.
#[must_use]
pub fn explore_request(keyword: &str, window: &DateWindow) -> String {
    serde_json::json!({
        "comparisonItem": [{
            "keyword": keyword,
            "time": window.timeframe(),
            "geo": "",
        }],
        "category": 0,
        "property": "",
    })
    .to_string()
}
