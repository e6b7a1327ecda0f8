use std::sync::OnceLock;

use regex::Regex;
use reqwest::Url;

use crate::PlatformApiError;

fn next_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"<([^>]+)>\s*;\s*rel\s*=\s*"?next"?"#).expect("next-link pattern is valid"))
}

/// Extracts the `rel="next"` target from an RFC 8288 `Link` header, if there is one.
pub fn next_page_url(link_header: &str) -> Option<String> {
    link_header
        .split(',')
        .find_map(|link| next_link_regex().captures(link.trim()))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Appends `suffix` to the path of `base`, keeping its query string. Used to get from a line item URL to its `scores`
/// and `results` sub-resources.
pub fn service_url(base: &str, suffix: &str) -> Result<String, PlatformApiError> {
    let mut url = Url::parse(base).map_err(|e| PlatformApiError::InvalidUrl(format!("{base}: {e}")))?;
    let path = format!("{}/{suffix}", url.path().trim_end_matches('/'));
    url.set_path(&path);
    Ok(url.to_string())
}
