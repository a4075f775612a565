pub mod handlers;
pub mod router;

pub use router::{AppState, metrics_router};

use randmetrics_core::{MetricDescriptor, MetricKind, build_fq_name};

/// Metric identity shared by both sample binaries.
pub fn random_number_descriptor() -> MetricDescriptor {
    MetricDescriptor::new(
        &build_fq_name("random", "number", "generated"),
        "A randomly generated number",
        MetricKind::Gauge,
        &[("app", "random_number_generator")],
        &[],
    )
}
