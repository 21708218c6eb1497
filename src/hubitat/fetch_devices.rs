use crate::domain::Device;
use crate::hubitat::device_get::DeviceGet;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, instrument};

pub const DEVICES_PATH: &str = "/apps/api/4/devices/all";

/// Retrieves every device known to the hub with a single request.
///
/// The response body is fully read before decoding, so the connection is released on every path.
#[instrument(skip_all)]
pub async fn fetch_devices(client: &Client, hubitat_address: &str, access_token: &str) -> Result<Vec<Device>, FetchDevicesError> {
    debug!("Retrieving Hubitat devices...");

    let body = client
        .get(format!("{}{}", hubitat_address.trim_end_matches('/'), DEVICES_PATH))
        .query(&[("access_token", access_token)])
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| FetchDevicesError::Request(e.without_url()))?
        .bytes()
        .await
        .map_err(|e| FetchDevicesError::Request(e.without_url()))?;

    // A null entry carries no attributes, so it is dropped instead of failing the whole list
    let devices = serde_json::from_slice::<Vec<Option<DeviceGet>>>(&body)?
        .into_iter()
        .flatten()
        .map(Device::from)
        .collect::<Vec<_>>();
    debug!("Retrieving Hubitat devices... OK, {} found", devices.len());

    Ok(devices)
}

#[derive(Error, Debug)]
pub enum FetchDevicesError {
    #[error("request to the Hubitat hub failed: {0}")]
    Request(reqwest::Error),
    #[error("could not decode the Hubitat device list: {0}")]
    Decode(#[from] serde_json::Error),
}
