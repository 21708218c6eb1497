use crate::domain::{LabelSchema, MetricDescriptor};
use std::collections::HashMap;
use std::sync::Arc;

const KNOWN_ATTRIBUTES: [(&str, &str, &str); 4] = [
    ("temperature", "hubitat_temperature_celsius", "Temperature in degrees Celsius"),
    ("humidity", "hubitat_humidity_percent", "Relative humidity in percent"),
    ("pressure", "hubitat_pressure_hpa", "Atmospheric pressure in hectopascals"),
    ("battery", "hubitat_battery_percent", "Battery level in percent"),
];

/// Maps the hub attributes this exporter understands to the series they are exported as.
///
/// Built once at startup and shared read-only between scrapes.
#[derive(Debug)]
pub struct AttributeRegistry {
    descriptors: HashMap<&'static str, Arc<MetricDescriptor>>,
}

impl AttributeRegistry {
    pub fn new(label_schema: LabelSchema) -> Self {
        let descriptors = KNOWN_ATTRIBUTES
            .into_iter()
            .map(|(attribute, name, help)| (attribute, Arc::new(MetricDescriptor::new(name, help, label_schema.labels()))))
            .collect();

        AttributeRegistry { descriptors }
    }

    pub fn lookup(&self, attribute: &str) -> Option<&Arc<MetricDescriptor>> {
        self.descriptors.get(attribute)
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &Arc<MetricDescriptor>> {
        self.descriptors.values()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }
}
