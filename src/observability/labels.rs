use metrics::{IntoLabels, Label, SharedString};

/// Set of [Label]s attached to every counter a validator reports.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    pub fn empty() -> Self {
        Labels(vec![])
    }

    /// Returns a copy with one more key-value pair, leaving `self` untouched
    pub fn with_label(
        &self,
        key: impl Into<SharedString>,
        value: impl Into<SharedString>,
    ) -> Labels {
        let mut labels = self.0.clone();
        labels.push(Label::new(key, value));
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
