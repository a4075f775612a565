use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use crate::error::{MetricsError, Result};
use crate::types::{CollectedFamily, MetricDescriptor, MetricSample};

/// The capability a metric source must provide to be scraped. `describe`
/// advertises the metric's identity unconditionally; `collect` runs once per
/// collection pass and may produce zero samples. Neither operation can fail.
pub trait Collector: Send + Sync {
    fn describe(&self) -> MetricDescriptor;
    fn collect(&self) -> Vec<MetricSample>;
}

/// Explicit collector registry. Constructed at startup and handed to the
/// HTTP layer and to every metric holder; there is no process-wide default.
pub struct MetricsRegistry {
    collectors: RwLock<HashMap<String, Arc<dyn Collector>>>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self {
            collectors: RwLock::new(HashMap::new()),
        }
    }

    pub fn register(&self, collector: Arc<dyn Collector>) -> Result<()> {
        let name = collector.describe().name;
        let mut collectors = self
            .collectors
            .write()
            .map_err(|_| MetricsError::PoisonedRegistry)?;

        if collectors.contains_key(&name) {
            return Err(MetricsError::AlreadyRegistered(name));
        }

        collectors.insert(name, collector);
        Ok(())
    }

    /// Runs one collection pass over every registered collector. Families are
    /// returned even when the pass produced no samples, so the definition of
    /// an exhausted metric is still advertised. Output is sorted by metric
    /// name to keep scrape bodies deterministic.
    pub fn collect_all(&self) -> Vec<CollectedFamily> {
        let collectors = match self.collectors.read() {
            Ok(guard) => guard,
            Err(_) => return Vec::new(),
        };

        let mut families = collectors
            .values()
            .map(|collector| CollectedFamily {
                descriptor: collector.describe(),
                samples: collector.collect(),
            })
            .collect::<Vec<_>>();

        families.sort_by(|left, right| left.descriptor.name.cmp(&right.descriptor.name));
        families
    }

    /// Renders one collection pass in the text exposition format. A family
    /// whose collector emitted no samples this pass is wholly absent from the
    /// body, HELP and TYPE lines included.
    pub fn render_text(&self) -> String {
        let families = self.collect_all();
        let mut output = String::new();

        for family in families {
            if family.samples.is_empty() {
                continue;
            }

            output.push_str("# HELP ");
            output.push_str(&family.descriptor.name);
            output.push(' ');
            output.push_str(&escape_help(&family.descriptor.help));
            output.push('\n');

            output.push_str("# TYPE ");
            output.push_str(&family.descriptor.name);
            output.push(' ');
            output.push_str(family.descriptor.kind.as_exposition_type());
            output.push('\n');

            for sample in family.samples {
                let mut labels = family.descriptor.const_labels.clone();
                labels.extend(sample.labels);
                output.push_str(&render_sample_line(
                    &family.descriptor.name,
                    &labels,
                    sample.value,
                ));
            }
        }

        output
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn render_sample_line(name: &str, labels: &[(String, String)], value: f64) -> String {
    let mut rendered = String::new();
    rendered.push_str(name);

    if !labels.is_empty() {
        rendered.push('{');
        for (index, (key, value)) in labels.iter().enumerate() {
            if index > 0 {
                rendered.push(',');
            }
            rendered.push_str(key);
            rendered.push_str("=\"");
            rendered.push_str(&escape_label_value(value));
            rendered.push('"');
        }
        rendered.push('}');
    }

    rendered.push(' ');
    rendered.push_str(&format_metric_value(value));
    rendered.push('\n');
    rendered
}

fn format_metric_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn escape_help(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\n', "\\n")
}

fn escape_label_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{Collector, MetricsRegistry};
    use crate::error::MetricsError;
    use crate::types::{MetricDescriptor, MetricKind, MetricSample};

    struct ConstCollector {
        descriptor: MetricDescriptor,
        samples: Vec<MetricSample>,
    }

    impl Collector for ConstCollector {
        fn describe(&self) -> MetricDescriptor {
            self.descriptor.clone()
        }

        fn collect(&self) -> Vec<MetricSample> {
            self.samples.clone()
        }
    }

    fn gauge_descriptor(name: &str) -> MetricDescriptor {
        MetricDescriptor::new(
            name,
            "A randomly generated number",
            MetricKind::Gauge,
            &[("app", "random_number_generator")],
            &[],
        )
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let registry = MetricsRegistry::new();
        registry
            .register(Arc::new(ConstCollector {
                descriptor: gauge_descriptor("random_number_generated"),
                samples: Vec::new(),
            }))
            .unwrap();

        let err = registry
            .register(Arc::new(ConstCollector {
                descriptor: gauge_descriptor("random_number_generated"),
                samples: Vec::new(),
            }))
            .unwrap_err();

        assert!(matches!(err, MetricsError::AlreadyRegistered(name) if name == "random_number_generated"));
    }

    #[test]
    fn renders_help_type_and_sample_lines() {
        let registry = MetricsRegistry::new();
        registry
            .register(Arc::new(ConstCollector {
                descriptor: gauge_descriptor("random_number_generated"),
                samples: vec![MetricSample::unlabeled(0.25)],
            }))
            .unwrap();

        assert_eq!(
            registry.render_text(),
            "# HELP random_number_generated A randomly generated number\n\
             # TYPE random_number_generated gauge\n\
             random_number_generated{app=\"random_number_generator\"} 0.25\n"
        );
    }

    #[test]
    fn family_without_samples_is_absent_from_output() {
        let registry = MetricsRegistry::new();
        registry
            .register(Arc::new(ConstCollector {
                descriptor: gauge_descriptor("random_number_generated"),
                samples: Vec::new(),
            }))
            .unwrap();

        // The definition is still advertised by the collection pass itself.
        let families = registry.collect_all();
        assert_eq!(families.len(), 1);
        assert_eq!(families[0].descriptor.name, "random_number_generated");
        assert!(families[0].samples.is_empty());

        assert_eq!(registry.render_text(), "");
    }

    #[test]
    fn shared_gauge_handle_registers_and_stays_writable() {
        use crate::collectors::RandomGauge;

        let registry = MetricsRegistry::new();
        let gauge = Arc::new(RandomGauge::new(gauge_descriptor("random_number_generated")));
        registry.register(gauge.clone()).unwrap();

        gauge.set(0.5);
        assert!(
            registry
                .render_text()
                .contains("random_number_generated{app=\"random_number_generator\"} 0.5\n")
        );
    }

    #[test]
    fn families_are_sorted_by_name() {
        let registry = MetricsRegistry::new();
        for name in ["zz_last", "aa_first", "mm_middle"] {
            registry
                .register(Arc::new(ConstCollector {
                    descriptor: gauge_descriptor(name),
                    samples: vec![MetricSample::unlabeled(1.0)],
                }))
                .unwrap();
        }

        let names = registry
            .collect_all()
            .into_iter()
            .map(|family| family.descriptor.name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["aa_first", "mm_middle", "zz_last"]);
    }

    #[test]
    fn label_values_are_escaped() {
        let registry = MetricsRegistry::new();
        registry
            .register(Arc::new(ConstCollector {
                descriptor: MetricDescriptor::new(
                    "escaped",
                    "help",
                    MetricKind::Gauge,
                    &[("path", "a\"b\\c\nd")],
                    &[],
                ),
                samples: vec![MetricSample::unlabeled(1.0)],
            }))
            .unwrap();

        let body = registry.render_text();
        assert!(body.contains("escaped{path=\"a\\\"b\\\\c\\nd\"} 1\n"));
    }

    #[test]
    fn whole_values_render_without_fraction() {
        let registry = MetricsRegistry::new();
        registry
            .register(Arc::new(ConstCollector {
                descriptor: gauge_descriptor("whole"),
                samples: vec![MetricSample::unlabeled(3.0)],
            }))
            .unwrap();

        assert!(registry.render_text().ends_with("} 3\n"));
    }
}
