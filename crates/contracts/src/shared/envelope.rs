//! Backend response envelope and its normalization into records.

use crate::shared::record::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// `{ success, data?, summary?, error?, message? }` returned by every endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<Value>>,
    #[serde(default)]
    pub summary: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("Backend unreachable: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Rows extracted from an envelope. A rejected envelope still yields an
/// (empty) row set so the page can render its "no data" state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedRows {
    pub rows: Vec<Record>,
    pub summary: Option<Value>,
    pub failure: Option<FetchFailure>,
    /// Entries of `data` that were not JSON objects.
    pub skipped: usize,
}

impl ApiEnvelope {
    pub fn into_rows(self, field_map: &[(&str, &str)]) -> LoadedRows {
        if !self.success {
            let reason = self
                .error
                .or(self.message)
                .unwrap_or_else(|| "success flag not set".to_string());
            log::warn!("Envelope rejected: {}", reason);
            return LoadedRows {
                failure: Some(FetchFailure::Rejected(reason)),
                ..LoadedRows::default()
            };
        }

        let data = self.data.unwrap_or_default();
        let total = data.len();
        let rows: Vec<Record> = data
            .iter()
            .filter_map(|item| Record::from_json(item, field_map))
            .collect();
        let skipped = total - rows.len();
        if skipped > 0 {
            log::warn!("Skipped {} non-object entries out of {}", skipped, total);
        }

        LoadedRows {
            rows,
            summary: self.summary,
            failure: None,
            skipped,
        }
    }
}

/// Page-level load state behind the loading / empty / failed messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Empty,
    Failed(String),
}

impl LoadStatus {
    pub fn from_result(result: &Result<LoadedRows, FetchFailure>) -> Self {
        match result {
            Ok(LoadedRows {
                failure: Some(failure),
                ..
            }) => Self::Failed(failure.to_string()),
            Ok(loaded) if loaded.rows.is_empty() => Self::Empty,
            Ok(_) => Self::Loaded,
            Err(failure) => Self::Failed(failure.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// User-facing status line; None while rows are on screen.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle | Self::Loaded => None,
            Self::Loading => Some("Loading...".to_string()),
            Self::Empty => Some("No data available".to_string()),
            Self::Failed(reason) => Some(format!("Failed to load: {}", reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> ApiEnvelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_success_with_rows() {
        let envelope = parse(json!({
            "success": true,
            "data": [{"Name": "C-001", "Issued_Weight__c": 12.5}, 7],
            "summary": {"count": 1}
        }));
        let loaded = envelope.into_rows(&[("Name", "id"), ("Issued_Weight__c", "issuedWeight")]);
        assert_eq!(loaded.rows.len(), 1);
        assert_eq!(loaded.skipped, 1);
        assert_eq!(loaded.rows[0].number_or_zero("issuedWeight"), 12.5);
        assert!(loaded.failure.is_none());
        assert_eq!(LoadStatus::from_result(&Ok(loaded)), LoadStatus::Loaded);
    }

    #[test]
    fn test_null_data_is_empty() {
        let loaded = parse(json!({"success": true, "data": null})).into_rows(&[]);
        assert!(loaded.rows.is_empty());
        assert!(loaded.failure.is_none());
        let status = LoadStatus::from_result(&Ok(loaded));
        assert_eq!(status.message().as_deref(), Some("No data available"));
    }

    #[test]
    fn test_unsuccessful_envelope_is_failure_with_no_rows() {
        let loaded = parse(json!({
            "success": false,
            "data": [{"a": 1}],
            "message": "Session expired"
        }))
        .into_rows(&[]);
        assert!(loaded.rows.is_empty());
        assert_eq!(loaded.failure, Some(FetchFailure::Rejected("Session expired".to_string())));

        let missing_flag = parse(json!({"data": []})).into_rows(&[]);
        assert!(missing_flag.failure.is_some());
    }

    #[test]
    fn test_transport_failure_status() {
        let status = LoadStatus::from_result(&Err(FetchFailure::Status(502)));
        assert_eq!(status.message().as_deref(), Some("Failed to load: HTTP error: 502"));
        assert!(LoadStatus::Loading.is_loading());
    }
}
