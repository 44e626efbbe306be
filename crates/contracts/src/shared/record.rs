//! Uniform record shape shared by every department table and summary strip.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Scalar value of a record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Converts a JSON scalar. Nulls, objects and arrays have no field value.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => n.as_f64().map(Self::Number),
            Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }

    /// Text used for search matching (`100.0` -> `"100"`, `true` -> `"true"`).
    pub fn to_search_text(&self) -> String {
        self.to_string()
    }

    /// Numeric reading of the value. Numeric text is parsed, everything else is None.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
        }
    }

    /// Total order used by column sorting: bool < number < text,
    /// numbers numerically, text case-insensitively.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Text(a), Self::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// One unit of department data: field name -> scalar value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for fixtures and tests.
    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.fields.insert(field.to_string(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    /// Missing or non-numeric values count as zero.
    pub fn number_or_zero(&self, field: &str) -> f64 {
        self.get(field).and_then(FieldValue::as_number).unwrap_or(0.0)
    }

    /// Display text of a field, empty when absent.
    pub fn display(&self, field: &str) -> String {
        self.get(field).map(ToString::to_string).unwrap_or_default()
    }

    pub fn id(&self) -> Option<String> {
        self.get("id").map(ToString::to_string)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Case-insensitive substring match against every field value.
    /// A blank query matches every record.
    pub fn matches_search(&self, query: &str) -> bool {
        if query.trim().is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.fields
            .values()
            .any(|value| value.to_search_text().to_lowercase().contains(&needle))
    }

    /// Compares two records by one field. Records lacking the field sort first.
    pub fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match (self.get(field), other.get(field)) {
            (Some(a), Some(b)) => a.compare(b),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Normalizes one backend JSON object into a record.
    ///
    /// Keys listed in `field_map` (backend name -> internal name) are renamed,
    /// other scalar keys pass through unchanged. Nulls and nested values are
    /// dropped. Returns None for anything that is not a JSON object.
    pub fn from_json(value: &Value, field_map: &[(&str, &str)]) -> Option<Self> {
        let object = value.as_object()?;
        let mut record = Self::new();
        for (key, raw) in object {
            let Some(field_value) = FieldValue::from_json(raw) else {
                continue;
            };
            let name = field_map
                .iter()
                .find(|(backend, _)| backend == key)
                .map(|(_, internal)| *internal)
                .unwrap_or(key.as_str());
            record.fields.insert(name.to_string(), field_value);
        }
        Some(record)
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_text_uses_default_conversion() {
        assert_eq!(FieldValue::Number(100.0).to_search_text(), "100");
        assert_eq!(FieldValue::Number(90.5).to_search_text(), "90.5");
        assert_eq!(FieldValue::Bool(true).to_search_text(), "true");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let record = Record::new().with("name", "POUCH1").with("issuedWeight", 12.5);
        assert!(record.matches_search("pouch1"));
        assert!(record.matches_search("PoUcH"));
        assert!(record.matches_search("12.5"));
        assert!(!record.matches_search("pouch2"));
        assert!(record.matches_search("   "));
    }

    #[test]
    fn test_number_or_zero_defaults() {
        let record = Record::new()
            .with("a", 4.0)
            .with("b", "7.25")
            .with("c", "n/a")
            .with("d", true);
        assert_eq!(record.number_or_zero("a"), 4.0);
        assert_eq!(record.number_or_zero("b"), 7.25);
        assert_eq!(record.number_or_zero("c"), 0.0);
        assert_eq!(record.number_or_zero("d"), 0.0);
        assert_eq!(record.number_or_zero("missing"), 0.0);
    }

    #[test]
    fn test_from_json_renames_and_drops_nested() {
        let value = json!({
            "Id": "a0B1",
            "Issued_Weight__c": 100,
            "Status__c": null,
            "Stones__r": [1, 2],
            "active": true
        });
        let map = [("Id", "id"), ("Issued_Weight__c", "issuedWeight")];
        let record = Record::from_json(&value, &map).unwrap();

        assert_eq!(record.id().as_deref(), Some("a0B1"));
        assert_eq!(record.number_or_zero("issuedWeight"), 100.0);
        assert_eq!(record.get("active"), Some(&FieldValue::Bool(true)));
        assert!(record.get("Status__c").is_none());
        assert!(record.get("Stones__r").is_none());
        assert!(Record::from_json(&json!("text"), &map).is_none());
    }

    #[test]
    fn test_compare_by_field() {
        let a = Record::new().with("w", 2.0).with("name", "alpha");
        let b = Record::new().with("w", 10.0).with("name", "Beta");
        let empty = Record::new();

        assert_eq!(a.compare_by_field(&b, "w"), Ordering::Less);
        assert_eq!(a.compare_by_field(&b, "name"), Ordering::Less);
        assert_eq!(empty.compare_by_field(&a, "w"), Ordering::Less);
        assert_eq!(empty.compare_by_field(&empty, "w"), Ordering::Equal);
    }
}
