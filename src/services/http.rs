use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::from_str;

use crate::models::error::UpstreamError;

/// GET `url` with `query` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<T, UpstreamError> {
    let res = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|source| UpstreamError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = res.status();
    if !status.is_success() {
        return Err(UpstreamError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = res.text().await.map_err(|source| UpstreamError::Request {
        url: url.to_string(),
        source,
    })?;
    from_str(&body).map_err(|source| UpstreamError::Malformed {
        url: url.to_string(),
        source,
    })
}
