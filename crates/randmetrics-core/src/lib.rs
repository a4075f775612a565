pub mod collectors;
pub mod error;
pub mod registry;
pub mod types;

pub use collectors::{BoundedCollector, RandomGauge};
pub use error::{MetricsError, Result};
pub use registry::{Collector, MetricsRegistry};
pub use types::{CollectedFamily, MetricDescriptor, MetricKind, MetricSample, build_fq_name};
