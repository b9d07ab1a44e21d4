//! Flat form data

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field label -> value, as collected from the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<String, String>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of a field, replacing any previous value
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(label.into(), value.into());
        self
    }

    /// Value of a field, if present
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    /// Value of a field when present and not blank
    pub fn get_non_empty(&self, label: &str) -> Option<&str> {
        self.get(label).filter(|value| !value.trim().is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
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
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut data = FormData::new();
        data.insert("氏名", "Taro").insert("理由", "");

        assert_eq!(data.get("氏名"), Some("Taro"));
        assert_eq!(data.get("理由"), Some(""));
        assert_eq!(data.get_non_empty("理由"), None);
        assert_eq!(data.get("missing"), None);
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_insert_replaces() {
        let mut data: FormData = [("申請_月", "4")].into_iter().collect();
        data.insert("申請_月", "5");
        assert_eq!(data.get("申請_月"), Some("5"));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_deserialize_flat_object() {
        let data: FormData =
            serde_json::from_str(r#"{ "氏名": "Taro", "行き_区分": "a" }"#).unwrap();
        assert_eq!(data.get("行き_区分"), Some("a"));
        assert!(serde_json::from_str::<FormData>(r#"{ "行き_時間": 8 }"#).is_err());
    }
}
