use metrics::{IntoLabels, Label};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key-value labels attached to the metrics of a scanner and its rules.
///
/// Serialized as a plain JSON object, e.g. `{"team": "identity"}`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Labels(BTreeMap<String, String>);

impl Labels {
    pub fn empty() -> Self {
        Labels::default()
    }

    pub fn new(labels: &[(impl Into<String> + Clone, impl Into<String> + Clone)]) -> Self {
        Labels(
            labels
                .iter()
                .map(|(key, value)| (key.clone().into(), value.clone().into()))
                .collect(),
        )
    }

    /// Clone the actual [Labels] with additional labels. Keys that already exist
    /// take the value from `additional_labels`.
    pub fn clone_with_labels(&self, additional_labels: Labels) -> Labels {
        let mut labels = self.0.clone();
        labels.extend(additional_labels.0);
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
            .into_iter()
            .map(|(key, value)| Label::new(key, value))
            .collect()
    }
}
