use indexmap::IndexMap;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Observation – one `key: value` line
// ---------------------------------------------------------------------------

/// One key/value pair extracted from a line of input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub key: String,
    /// Everything after the first colon, trimmed. May contain more colons.
    pub raw_value: String,
}

// ---------------------------------------------------------------------------
// ObservationSet – insertion-ordered key → raw value mapping
// ---------------------------------------------------------------------------

/// All observations of one document, keyed by trimmed key.
///
/// Re-inserting an existing key replaces its value but keeps the position the
/// key was first seen at, so iteration order is first-seen-key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ObservationSet {
    entries: IndexMap<String, String>,
}

impl ObservationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an observation, overwriting any earlier value for the same key.
    pub fn insert(&mut self, observation: Observation) {
        self.entries.insert(observation.key, observation.raw_value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(key, raw_value)` pairs in first-seen-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<Observation> for ObservationSet {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        let mut set = ObservationSet::new();
        for obs in iter {
            set.insert(obs);
        }
        set
    }
}

// ---------------------------------------------------------------------------
// Classified observations
// ---------------------------------------------------------------------------

/// An observation whose value contained a numeral.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericObservation {
    pub key: String,
    pub value: f64,
}

impl NumericObservation {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// An observation whose value had no numeral; keeps the trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptiveObservation {
    pub key: String,
    pub value: String,
}

/// The numeric / descriptive partition of an [`ObservationSet`].
///
/// Both lists keep the set's key order and never share a key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassifiedObservations {
    pub numeric: Vec<NumericObservation>,
    pub descriptive: Vec<DescriptiveObservation>,
}

impl ClassifiedObservations {
    pub fn is_empty(&self) -> bool {
        self.numeric.is_empty() && self.descriptive.is_empty()
    }

    /// Total number of observations across both lists.
    pub fn len(&self) -> usize {
        self.numeric.len() + self.descriptive.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(key: &str, value: &str) -> Observation {
        Observation {
            key: key.to_string(),
            raw_value: value.to_string(),
        }
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let set: ObservationSet = vec![obs("A", "1"), obs("B", "2"), obs("A", "3")]
            .into_iter()
            .collect();

        let pairs: Vec<_> = set.iter().collect();
        assert_eq!(pairs, vec![("A", "3"), ("B", "2")]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let set: ObservationSet = vec![obs("Revenue", "$5M")].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"Revenue":"$5M"}"#);
    }
}
