use crate::domain::device::Device;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct MetricDescriptor {
    name: &'static str,
    help: &'static str,
    labels: Vec<LabelName>,
}

impl MetricDescriptor {
    pub fn new(name: &'static str, help: &'static str, labels: Vec<LabelName>) -> Self {
        MetricDescriptor { name, help, labels }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn help(&self) -> &'static str {
        self.help
    }

    pub fn labels(&self) -> &[LabelName] {
        &self.labels
    }

    /// Pairs every label of this descriptor with the matching value of `device`, in declaration order.
    pub fn label_values(&self, device: &Device) -> Vec<(String, String)> {
        self.labels()
            .iter()
            .map(|label| (label.as_str().to_owned(), label.value_of(device).to_owned()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelName {
    Name,
    Label,
    Model,
    Manufacturer,
    Room,
}

impl LabelName {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelName::Name => "name",
            LabelName::Label => "label",
            LabelName::Model => "model",
            LabelName::Manufacturer => "manufacturer",
            LabelName::Room => "room",
        }
    }

    pub fn value_of<'a>(&self, device: &'a Device) -> &'a str {
        match self {
            LabelName::Name => device.name.as_deref().unwrap_or_default(),
            LabelName::Label => &device.label,
            LabelName::Model => &device.model,
            LabelName::Manufacturer => &device.manufacturer,
            LabelName::Room => &device.room,
        }
    }
}

/// Selects which device fields end up as labels on every exported series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSchema {
    #[default]
    WithName,
    WithoutName,
}

impl LabelSchema {
    pub fn labels(&self) -> Vec<LabelName> {
        match self {
            LabelSchema::WithName => vec![
                LabelName::Name,
                LabelName::Label,
                LabelName::Model,
                LabelName::Manufacturer,
                LabelName::Room,
            ],
            LabelSchema::WithoutName => vec![LabelName::Label, LabelName::Model, LabelName::Manufacturer, LabelName::Room],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn device() -> Device {
        Device {
            name: Some("Generic Zigbee Temperature Sensor".to_string()),
            label: "Living room sensor".to_string(),
            model: "TH01".to_string(),
            manufacturer: "eWeLink".to_string(),
            room: "Living room".to_string(),
            ..Device::default()
        }
    }

    #[test]
    fn label_values_follow_the_declared_label_order() {
        let descriptor = MetricDescriptor::new("hubitat_test", "Test", LabelSchema::WithName.labels());

        assert_eq!(
            descriptor.label_values(&device()),
            vec![
                ("name".to_string(), "Generic Zigbee Temperature Sensor".to_string()),
                ("label".to_string(), "Living room sensor".to_string()),
                ("model".to_string(), "TH01".to_string()),
                ("manufacturer".to_string(), "eWeLink".to_string()),
                ("room".to_string(), "Living room".to_string()),
            ]
        );
    }

    #[test]
    fn label_values_without_name_leave_out_the_device_name() {
        let descriptor = MetricDescriptor::new("hubitat_test", "Test", LabelSchema::WithoutName.labels());

        let labels = descriptor.label_values(&device());

        assert_eq!(labels.len(), 4);
        assert!(labels.iter().all(|(name, _)| name != "name"));
    }

    #[test]
    fn a_missing_device_name_becomes_an_empty_label_value() {
        let device = Device { name: None, ..device() };

        assert_eq!(LabelName::Name.value_of(&device), "");
    }

    #[test]
    fn label_schema_deserializes_from_snake_case() -> Result<(), serde_json::Error> {
        let schema: LabelSchema = serde_json::from_str(r#""without_name""#)?;

        assert_eq!(schema, LabelSchema::WithoutName);
        Ok(())
    }
}
