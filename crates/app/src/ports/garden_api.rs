//! Device API port, the four HTTP operations the dashboard uses.

use std::future::Future;
use std::rc::Rc;

use garden_domain::relay::{RelayAck, RelayCommand};
use garden_domain::snapshot::SensorSnapshot;

/// Failure of a single API call.
///
/// The controller treats every variant the same way (log, release the busy
/// indicator, keep the current display); the split exists for the logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The device answered with a non-success status.
    #[error("HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },
    /// The request body could not be encoded.
    #[error("failed to encode request: {0}")]
    Encode(String),
    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Access to the garden device's REST API.
///
/// Futures are not required to be `Send`: implementations run on the
/// browser's single-threaded event loop.
pub trait GardenApi {
    /// `GET /sensor-data`.
    fn fetch_snapshot(&self) -> impl Future<Output = Result<SensorSnapshot, ApiError>>;

    /// `POST /read-now`. A non-2xx status is an [`ApiError::Status`].
    fn read_now(&self) -> impl Future<Output = Result<(), ApiError>>;

    /// `POST /relay`. The status is not checked; the body must be JSON.
    fn set_relay(&self, command: RelayCommand)
    -> impl Future<Output = Result<RelayAck, ApiError>>;

    /// `POST /water-now`. Resolves to the response status, whatever it is.
    fn water_now(&self) -> impl Future<Output = Result<u16, ApiError>>;
}

impl<T: GardenApi> GardenApi for Rc<T> {
    fn fetch_snapshot(&self) -> impl Future<Output = Result<SensorSnapshot, ApiError>> {
        (**self).fetch_snapshot()
    }

    fn read_now(&self) -> impl Future<Output = Result<(), ApiError>> {
        (**self).read_now()
    }

    fn set_relay(
        &self,
        command: RelayCommand,
    ) -> impl Future<Output = Result<RelayAck, ApiError>> {
        (**self).set_relay(command)
    }

    fn water_now(&self) -> impl Future<Output = Result<u16, ApiError>> {
        (**self).water_now()
    }
}
