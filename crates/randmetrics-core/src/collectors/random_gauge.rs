use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

use crate::registry::Collector;
use crate::types::{MetricDescriptor, MetricSample};

/// Directly instrumented gauge: application code overwrites the value on its
/// own schedule, independent of any collection request. The value is stored
/// as its f64 bit pattern so reads and writes never block and never tear.
pub struct RandomGauge {
    descriptor: MetricDescriptor,
    value_bits: AtomicU64,
}

impl RandomGauge {
    pub fn new(descriptor: MetricDescriptor) -> Self {
        Self {
            descriptor,
            value_bits: AtomicU64::new(0.0_f64.to_bits()),
        }
    }

    pub fn set(&self, value: f64) {
        self.value_bits.store(value.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.value_bits.load(Ordering::Relaxed))
    }

    /// One update of the value source: draws a fresh number in [0, 1) and
    /// overwrites the stored value. The periodic schedule lives with the
    /// caller.
    pub fn tick(&self) {
        self.set(rand::rng().random());
    }
}

impl Collector for RandomGauge {
    fn describe(&self) -> MetricDescriptor {
        self.descriptor.clone()
    }

    fn collect(&self) -> Vec<MetricSample> {
        vec![MetricSample::unlabeled(self.get())]
    }
}
