//! HTTP API client wrapping `gloo-net` for calls to the device's `/api/*`.

use std::future::Future;

use garden_app::ports::{ApiError, GardenApi};
use garden_domain::relay::{RelayAck, RelayCommand};
use garden_domain::snapshot::SensorSnapshot;
use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::{RequestCache, RequestCredentials};

/// [`GardenApi`] over `fetch`, rooted at a base URL such as `/api`.
#[derive(Debug, Clone)]
pub struct HttpGardenApi {
    base_url: String,
}

impl HttpGardenApi {
    /// Create a client for the API mounted at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url)
    }
}

/// The request failed before a response arrived.
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// The request body could not be serialized.
fn encode(err: gloo_net::Error) -> ApiError {
    ApiError::Encode(err.to_string())
}

/// The response arrived but its body could not be decoded.
fn decode(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Reject non-2xx responses.
fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    Err(ApiError::Status {
        status: resp.status(),
        status_text: resp.status_text(),
    })
}

/// GET with same-origin credentials and the HTTP cache bypassed.
fn get(url: &str) -> RequestBuilder {
    Request::get(url)
        .credentials(RequestCredentials::SameOrigin)
        .cache(RequestCache::NoCache)
}

/// Body-less JSON POST with same-origin credentials.
fn post(url: &str) -> RequestBuilder {
    Request::post(url)
        .credentials(RequestCredentials::SameOrigin)
        .header("Content-Type", "application/json")
}

impl GardenApi for HttpGardenApi {
    fn fetch_snapshot(&self) -> impl Future<Output = Result<SensorSnapshot, ApiError>> {
        let url = self.url("sensor-data");
        async move {
            let resp = check_response(get(&url).send().await.map_err(network)?)?;
            resp.json::<SensorSnapshot>().await.map_err(decode)
        }
    }

    fn read_now(&self) -> impl Future<Output = Result<(), ApiError>> {
        let url = self.url("read-now");
        async move {
            let resp = post(&url)
                .cache(RequestCache::NoCache)
                .send()
                .await
                .map_err(network)?;
            tracing::debug!(status = resp.status(), "read-now response");
            check_response(resp).map(|_| ())
        }
    }

    fn set_relay(
        &self,
        command: RelayCommand,
    ) -> impl Future<Output = Result<RelayAck, ApiError>> {
        let url = self.url("relay");
        async move {
            let resp = Request::post(&url)
                .credentials(RequestCredentials::SameOrigin)
                .json(&command)
                .map_err(encode)?
                .send()
                .await
                .map_err(network)?;
            tracing::debug!(status = resp.status(), "relay response");
            resp.json::<RelayAck>().await.map_err(decode)
        }
    }

    fn water_now(&self) -> impl Future<Output = Result<u16, ApiError>> {
        let url = self.url("water-now");
        async move {
            let resp = post(&url).send().await.map_err(network)?;
            Ok(resp.status())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_join_endpoint_to_base_url() {
        let api = HttpGardenApi::new("/api");
        assert_eq!(api.url("sensor-data"), "/api/sensor-data");
    }

    #[test]
    fn should_report_body_serialization_failure_as_encode_error() {
        let err = serde_json::from_str::<u8>("not json").unwrap_err();
        let mapped = encode(gloo_net::Error::SerdeError(err));
        assert!(matches!(mapped, ApiError::Encode(_)));
    }

    #[test]
    fn should_trim_trailing_slash_from_base_url() {
        let api = HttpGardenApi::new("http://garden.local/api/");
        assert_eq!(api.url("relay"), "http://garden.local/api/relay");
    }
}
