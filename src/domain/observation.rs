use crate::domain::metric_descriptor::MetricDescriptor;
use std::num::ParseFloatError;
use std::sync::Arc;
use thiserror::Error;

/// A single gauge value for one device.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub descriptor: Arc<MetricDescriptor>,
    pub labels: Vec<(String, String)>,
    pub value: f64,
}

#[derive(Debug, PartialEq)]
pub enum AttributeOutcome {
    Observed(Observation),
    Skipped(SkipReason),
}

impl AttributeOutcome {
    pub fn observation(self) -> Option<Observation> {
        match self {
            AttributeOutcome::Observed(observation) => Some(observation),
            AttributeOutcome::Skipped(_) => None,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SkipReason {
    #[error("unknown attribute '{key}'")]
    UnknownAttribute { key: String },
    #[error("could not parse value '{value}' for attribute '{key}': {source}")]
    UnparsableValue { key: String, value: String, source: ParseFloatError },
    #[error("value '{value}' for attribute '{key}' is not a finite number")]
    NonFiniteValue { key: String, value: String },
}
