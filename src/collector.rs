use crate::app_config::AppConfig;
use crate::attribute_registry::AttributeRegistry;
use crate::domain::{AttributeOutcome, Device, Observation, SkipReason};
use crate::hubitat::{FetchDevicesError, fetch_devices};
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, trace, warn};

/// Turns one scrape into the observations of every known attribute the hub currently reports.
///
/// Holds nothing but immutable configuration, so concurrent scrapes can share a single instance.
pub struct Collector {
    client: Client,
    hubitat_address: String,
    access_token: String,
    registry: Arc<AttributeRegistry>,
}

impl Collector {
    pub fn new(client: Client, config: &AppConfig, registry: Arc<AttributeRegistry>) -> Self {
        Collector {
            client,
            hubitat_address: config.hubitat_address().to_owned(),
            access_token: config.hubitat_access_token().to_owned(),
            registry,
        }
    }

    pub fn hubitat_address(&self) -> &str {
        &self.hubitat_address
    }

    pub fn registry(&self) -> &AttributeRegistry {
        &self.registry
    }

    /// Runs a single fetch and translates the result.
    ///
    /// A failed fetch or decode is logged and yields no observations at all.
    #[instrument(skip_all)]
    pub async fn collect(&self) -> Vec<Observation> {
        let devices = match self.fetch_devices().await {
            Ok(devices) => devices,
            Err(e) => {
                error!("❌ Unable to collect Hubitat devices: {}", e);
                return Vec::new();
            }
        };

        let observations = devices
            .iter()
            .flat_map(|device| self.translate_device(device))
            .filter_map(AttributeOutcome::observation)
            .collect::<Vec<_>>();

        info!("🟢 Collected {} observation(s) from {} device(s)", observations.len(), devices.len());
        observations
    }

    pub async fn fetch_devices(&self) -> Result<Vec<Device>, FetchDevicesError> {
        fetch_devices(&self.client, &self.hubitat_address, &self.access_token).await
    }

    pub fn translate_device(&self, device: &Device) -> Vec<AttributeOutcome> {
        debug!(device_type = device.r#type, "🔵 Translating {} attribute(s) of '{}'", device.attributes.len(), device.label);

        device
            .attributes
            .iter()
            .map(|(key, raw_value)| self.translate_attribute(device, key, raw_value))
            .collect()
    }

    pub fn translate_attribute(&self, device: &Device, key: &str, raw_value: &str) -> AttributeOutcome {
        let Some(descriptor) = self.registry.lookup(key) else {
            trace!("Skipping unknown attribute '{}' of '{}'", key, device.label);
            return AttributeOutcome::Skipped(SkipReason::UnknownAttribute { key: key.to_owned() });
        };

        let value = match raw_value.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            Ok(_) => {
                warn!("⚠️ Value '{}' for attribute '{}' of '{}' is not a finite number", raw_value, key, device.label);
                return AttributeOutcome::Skipped(SkipReason::NonFiniteValue {
                    key: key.to_owned(),
                    value: raw_value.to_owned(),
                });
            }
            Err(e) => {
                warn!("⚠️ Error parsing value '{}' for attribute '{}' of '{}': {}", raw_value, key, device.label, e);
                return AttributeOutcome::Skipped(SkipReason::UnparsableValue {
                    key: key.to_owned(),
                    value: raw_value.to_owned(),
                    source: e,
                });
            }
        };

        AttributeOutcome::Observed(Observation {
            descriptor: descriptor.clone(),
            labels: descriptor.label_values(device),
            value,
        })
    }
}
