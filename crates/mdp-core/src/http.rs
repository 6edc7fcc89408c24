//! Small HTTP GET helper built on the curl easy API.

use std::time::Duration;

use crate::error::FetchError;

/// Fetches `url` and returns the body plus the server-reported content
/// type, if any.
///
/// Follows redirects. Runs in the current thread; call from
/// `spawn_blocking` if used from async code.
pub fn get_bytes(url: &str) -> Result<(Vec<u8>, Option<String>), FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(30))?;

    let mut body: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Extraction(format!(
            "GET {} returned HTTP {}",
            url, code
        )));
    }

    let content_type = easy.content_type()?.map(|s| s.to_string());
    Ok((body, content_type))
}
