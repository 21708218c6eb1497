mod client;
mod device_get;
mod fetch_devices;

pub use client::new_client;
pub use fetch_devices::{FetchDevicesError, fetch_devices};

#[cfg(test)]
pub use fetch_devices::DEVICES_PATH;
