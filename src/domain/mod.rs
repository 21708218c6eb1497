pub mod device;
pub mod metric_descriptor;
pub mod observation;

pub use device::Device;
pub use metric_descriptor::{LabelName, LabelSchema, MetricDescriptor};
pub use observation::{AttributeOutcome, Observation, SkipReason};
