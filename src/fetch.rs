//! Blocking HTTP GET returning the response body as text.
//!
//! Uses the curl crate (libcurl). Runs in the current thread.

use std::time::Duration;

use tracing::{debug, info};
use url::Url;

use crate::error::UrlUtilsError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const TOTAL_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_REDIRECTIONS: u32 = 10;

/// Fetch `url` and return the response body decoded as UTF-8.
///
/// Follows redirects. No retries.
///
/// # Errors
///
/// * [`UrlUtilsError::InvalidUrl`] if `url` is not an absolute URL
/// * [`UrlUtilsError::Network`] on transport, DNS or HTTP (status >= 400) failure
/// * [`UrlUtilsError::Decode`] if the body is not valid UTF-8
pub fn fetch(url: &str) -> Result<String, UrlUtilsError> {
    let url = Url::parse(url.trim())?;
    info!(url = %url, "fetching");

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTIONS)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.timeout(TOTAL_TIMEOUT)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if code >= 400 {
        return Err(UrlUtilsError::Network(format!(
            "GET {} returned HTTP {}",
            url, code
        )));
    }

    debug!(status = code, bytes = body.len(), "fetch complete");
    Ok(String::from_utf8(body)?)
}
