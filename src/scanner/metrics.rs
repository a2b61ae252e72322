use crate::Labels;
use metrics::{counter, Counter};

pub struct RuleMetrics {
    pub false_positive_checksum: Counter,
}

const TYPE: &str = "type";

impl RuleMetrics {
    pub fn new(labels: &Labels) -> Self {
        RuleMetrics {
            false_positive_checksum: counter!(
                "false_positive.checksum",
                labels.clone_with_labels(Labels::new(&[(TYPE, "checksum")]))
            ),
        }
    }
}

pub struct ScannerMetrics {
    pub num_scanned_events: Counter,
    pub duration_ns: Counter,
    pub match_count: Counter,
}

impl ScannerMetrics {
    pub fn new(labels: &Labels) -> Self {
        ScannerMetrics {
            num_scanned_events: counter!("scanned_events", labels.clone()),
            duration_ns: counter!("scanning.duration", labels.clone()),
            match_count: counter!("scanning.match_count", labels.clone()),
        }
    }
}
