use metrics::{IntoLabels, Label, SharedString};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Holder of multiple [Label] providing some methods to easily clone and adds new labels in it.
///
/// Stored as a sorted map so a config can carry it as a plain JSON object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Labels(BTreeMap<String, String>);

pub const NO_LABEL: Labels = Labels(BTreeMap::new());

impl Labels {
    /// Clone the actual [Labels] with additional key-value labels
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(impl Into<String> + Clone, impl Into<String> + Clone)],
    ) -> Labels {
        let mut tags = self.0.clone();
        tags.extend(
            additional_labels
                .iter()
                .map(|(k, v)| (k.clone().into(), v.clone().into())),
        );
        Labels(tags)
    }

    pub fn new(labels: &[(impl Into<String> + Clone, impl Into<String> + Clone)]) -> Self {
        NO_LABEL.clone_with_labels(labels)
    }

    pub fn empty() -> Self {
        NO_LABEL
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
            .into_iter()
            .map(|(k, v)| Label::new(SharedString::from(k), SharedString::from(v)))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use crate::observability::labels::Labels;
    use metrics::{IntoLabels, Label};

    #[test]
    fn test_clone_labels() {
        let labels = Labels::new(&[("key_1", "value_1")]);

        let labels_2 = labels.clone_with_labels(&[("key_2", "value_2")]);
        let label_list = labels_2.into_labels();
        assert!(label_list.contains(&Label::new("key_1", "value_1")));
        assert!(label_list.contains(&Label::new("key_2", "value_2")));

        let labels_3 = labels.clone_with_labels(&[("key_3", "value_3"), ("key_4", "value_4")]);
        let label_list = labels_3.into_labels();
        assert!(label_list.contains(&Label::new("key_1", "value_1")));
        assert!(!label_list.contains(&Label::new("key_2", "value_2")));
        assert!(label_list.contains(&Label::new("key_3", "value_3")));
        assert!(label_list.contains(&Label::new("key_4", "value_4")));
    }

    #[test]
    fn later_labels_override_earlier_ones() {
        let labels = Labels::new(&[("outcome", "a")]).clone_with_labels(&[("outcome", "b")]);
        assert_eq!(labels.into_labels(), vec![Label::new("outcome", "b")]);
    }

    #[test]
    fn deserializes_from_json_object() {
        let labels: Labels = serde_json::from_str(r#"{"service": "forms"}"#).unwrap();
        assert_eq!(labels, Labels::new(&[("service", "forms")]));
    }
}
