use serde::{Deserialize, Serialize};

use super::ids::OptionsId;

/// A named discrete-choice control on a mixer device, such as an input
/// source selector ("Mic" / "Line" / "Digital").
///
/// Carries the legal value list; the *current* value is device state,
/// read through `get_option` on the owning device. The legal set is
/// device-defined and not enforced by the dispatch layer. Like [`Track`],
/// an options group is a passive handle: clones address `set_option` /
/// `get_option` calls and entity-scoped subscriptions.
///
/// [`Track`]: super::track::Track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    id: OptionsId,
    label: String,
    values: Vec<String>,
}

impl Options {
    /// Create an options group with a fresh handle.
    pub fn new(label: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            id: OptionsId::new(),
            label: label.into(),
            values,
        }
    }

    pub fn id(&self) -> OptionsId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The device-defined legal value list, in device order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_selector() -> Options {
        Options::new(
            "Input Source",
            vec!["Mic".into(), "Line".into(), "Digital".into()],
        )
    }

    #[test]
    fn membership_check() {
        let opts = source_selector();
        assert!(opts.contains("Line"));
        assert!(!opts.contains("Phono"));
    }

    #[test]
    fn preserves_value_order() {
        let opts = source_selector();
        assert_eq!(opts.values(), ["Mic", "Line", "Digital"]);
    }
}
