use crate::domain::Device;
use serde::Deserialize;
use std::collections::HashMap;

// API: https://docs2.hubitat.com/en/apps/maker-api
// Every field is optional on the wire, a missing or null value ends up as an empty string.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeviceGet {
    pub name: Option<String>,
    pub label: Option<String>,
    pub r#type: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub room: Option<String>,
    pub attributes: Option<HashMap<String, Option<String>>>,
}

impl From<DeviceGet> for Device {
    fn from(device_get: DeviceGet) -> Self {
        Device {
            name: device_get.name,
            label: device_get.label.unwrap_or_default(),
            r#type: device_get.r#type.unwrap_or_default(),
            model: device_get.model.unwrap_or_default(),
            manufacturer: device_get.manufacturer.unwrap_or_default(),
            room: device_get.room.unwrap_or_default(),
            attributes: device_get
                .attributes
                .unwrap_or_default()
                .into_iter()
                .map(|(key, value)| (key, value.unwrap_or_default()))
                .collect(),
        }
    }
}
