use crate::attribute_registry::AttributeRegistry;
use crate::domain::Observation;
use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::atomic::AtomicU64;
use tracing::{debug, warn};

pub const CONTENT_TYPE: &str = "application/openmetrics-text; version=1.0.0; charset=utf-8";

type GaugeFamily = Family<Vec<(String, String)>, Gauge<f64, AtomicU64>>;

/// Encodes the observations of a single scrape in the OpenMetrics text format.
///
/// Every known series is described even when the scrape produced no values for it. `constant_labels` are added to
/// every sample.
pub fn render(
    attribute_registry: &AttributeRegistry,
    observations: &[Observation],
    constant_labels: Vec<(&'static str, String)>,
) -> Result<String, fmt::Error> {
    let mut registry = Registry::with_labels(constant_labels.into_iter().map(|(name, value)| (Cow::Borrowed(name), Cow::Owned(escape_label_value(&value)))));

    let mut descriptors = attribute_registry.descriptors().collect::<Vec<_>>();
    descriptors.sort_by_key(|descriptor| descriptor.name());

    let mut families = HashMap::with_capacity(descriptors.len());
    for descriptor in descriptors {
        let family = GaugeFamily::default();
        registry.register(descriptor.name(), descriptor.help(), family.clone());
        families.insert(descriptor.name(), family);
    }

    let mut seen = HashSet::with_capacity(observations.len());
    for observation in observations {
        let name = observation.descriptor.name();
        let Some(family) = families.get(name) else {
            warn!("⚠️ No series registered for '{}'", name);
            continue;
        };

        if !seen.insert((name, &observation.labels)) {
            debug!("Duplicate series '{}' {:?}, keeping the last value", name, observation.labels);
        }
        family.get_or_create(&escape_label_values(&observation.labels)).set(observation.value);
    }

    let mut body = String::new();
    encode(&mut body, &registry)?;
    Ok(body)
}

// The text encoder writes label values verbatim, device labels are free text entered on the hub.
fn escape_label_values(labels: &[(String, String)]) -> Vec<(String, String)> {
    labels
        .iter()
        .map(|(name, value)| (name.clone(), escape_label_value(value)))
        .collect()
}

fn escape_label_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }
    escaped
}
