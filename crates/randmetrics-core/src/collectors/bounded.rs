use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::registry::Collector;
use crate::types::{MetricDescriptor, MetricSample};

/// On-demand collector with a bounded-emission policy: the value is computed
/// at collection time, and after `limit` passes the collector permanently
/// stops emitting. The metric then vanishes from scrape bodies instead of
/// reporting a stale value; its definition stays advertised via `describe`.
///
/// The pass counter is incremented once per `collect` call whether or not a
/// sample is emitted, and the increment-then-compare is a single atomic
/// operation, so the cutoff is exact under concurrent scrapes.
pub struct BoundedCollector<F> {
    descriptor: MetricDescriptor,
    limit: u64,
    passes_served: AtomicU64,
    source: F,
}

impl<F> BoundedCollector<F>
where
    F: Fn() -> f64 + Send + Sync,
{
    pub fn new(descriptor: MetricDescriptor, limit: u64, source: F) -> Self {
        Self {
            descriptor,
            limit,
            passes_served: AtomicU64::new(0),
            source,
        }
    }

    pub fn passes_served(&self) -> u64 {
        self.passes_served.load(Ordering::Relaxed)
    }

    pub fn is_exhausted(&self) -> bool {
        self.passes_served() >= self.limit
    }
}

impl<F> Collector for BoundedCollector<F>
where
    F: Fn() -> f64 + Send + Sync,
{
    fn describe(&self) -> MetricDescriptor {
        self.descriptor.clone()
    }

    fn collect(&self) -> Vec<MetricSample> {
        let pass = self.passes_served.fetch_add(1, Ordering::Relaxed);
        debug!(pass, limit = self.limit, metric = %self.descriptor.name, "collection pass");

        if pass < self.limit {
            vec![MetricSample::unlabeled((self.source)())]
        } else {
            Vec::new()
        }
    }
}
