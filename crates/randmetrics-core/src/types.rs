#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
}

impl MetricKind {
    pub fn as_exposition_type(&self) -> &'static str {
        match self {
            Self::Counter => "counter",
            Self::Gauge => "gauge",
        }
    }
}

/// Immutable identity of a metric. Created once at startup and shared by
/// every collection pass; the registry keys collectors by `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDescriptor {
    pub name: String,
    pub help: String,
    pub kind: MetricKind,
    pub const_labels: Vec<(String, String)>,
    pub variable_labels: Vec<String>,
}

impl MetricDescriptor {
    pub fn new(
        name: &str,
        help: &str,
        kind: MetricKind,
        const_labels: &[(&str, &str)],
        variable_labels: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            help: help.to_string(),
            kind,
            const_labels: const_labels
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                .collect(),
            variable_labels: variable_labels.iter().map(|label| (*label).to_string()).collect(),
        }
    }
}

/// Joins the non-empty name parts with underscores, e.g.
/// `("random", "number", "generated")` becomes `random_number_generated`.
pub fn build_fq_name(namespace: &str, subsystem: &str, name: &str) -> String {
    let mut fq_name = String::new();
    for part in [namespace, subsystem, name] {
        if part.is_empty() {
            continue;
        }
        if !fq_name.is_empty() {
            fq_name.push('_');
        }
        fq_name.push_str(part);
    }
    fq_name
}

/// One value produced by one collection pass. `labels` holds variable-label
/// pairs only; constant labels come from the descriptor at render time.
#[derive(Debug, Clone)]
pub struct MetricSample {
    pub value: f64,
    pub labels: Vec<(String, String)>,
}

impl MetricSample {
    pub fn unlabeled(value: f64) -> Self {
        Self {
            value,
            labels: Vec::new(),
        }
    }
}

/// Output of one collection pass for one collector: the descriptor is always
/// present, `samples` may be empty.
#[derive(Debug, Clone)]
pub struct CollectedFamily {
    pub descriptor: MetricDescriptor,
    pub samples: Vec<MetricSample>,
}

#[cfg(test)]
mod tests {
    use super::build_fq_name;

    #[test]
    fn fq_name_joins_all_parts() {
        assert_eq!(
            build_fq_name("random", "number", "generated"),
            "random_number_generated"
        );
    }

    #[test]
    fn fq_name_skips_empty_parts() {
        assert_eq!(build_fq_name("", "number", "generated"), "number_generated");
        assert_eq!(build_fq_name("random", "", "generated"), "random_generated");
        assert_eq!(build_fq_name("", "", "generated"), "generated");
    }
}
