use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Label set attached to a cloud resource, ordered by key.
///
/// Keys and values are expected to already satisfy the RFC1035 alphabet;
/// nothing here validates them.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(pub BTreeMap<String, String>);

impl Labels {
    /// Create an empty set of labels.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns `true` if no labels are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Insert or overwrite a label.
    ///
    /// Returns `self` for chaining.
    pub fn insert<K, V>(&mut self, key: K, val: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), val.into());
        self
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Returns `true` if the key is present, whatever its value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate through all labels as `(&str, &str)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Labels
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Labels;

    #[test]
    fn insert_overwrites_and_chains() {
        let mut labels = Labels::new();
        labels.insert("a", "1").insert("b", "2").insert("a", "3");

        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get("a"), Some("3"));
        assert_eq!(labels.get("b"), Some("2"));
        assert!(labels.get("c").is_none());
    }

    #[test]
    fn iter_is_ordered_by_key() {
        let labels: Labels = [("z", ""), ("a", "x"), ("m", "y")].into_iter().collect();
        let keys: Vec<_> = labels.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "m", "z"]);
    }

    #[test]
    fn empty_value_still_counts_as_present() {
        let mut labels = Labels::new();
        labels.insert("k8s-io-role-node", "");
        assert!(labels.contains_key("k8s-io-role-node"));
        assert_eq!(labels.get("k8s-io-role-node"), Some(""));
    }

    #[test]
    fn serde_transparent_object() {
        let mut labels = Labels::new();
        labels.insert("k8s-io-cluster-name", "prod-example-com");

        let json = serde_json::to_string(&labels).unwrap();
        assert_eq!(json, r#"{"k8s-io-cluster-name":"prod-example-com"}"#);

        let back: Labels = serde_json::from_str(&json).unwrap();
        assert_eq!(back, labels);
    }
}
