use crate::shared::api_utils::{api_url, bearer};
use contracts::domain::departments::DepartmentSpec;
use contracts::shared::config::ApiConfig;
use contracts::shared::envelope::{ApiEnvelope, FetchFailure, LoadedRows};
use contracts::shared::summary::SummaryWindow;
use gloo_net::http::Request;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WindowQuery {
    start_date: String,
    end_date: String,
}

/// URL of a department's list endpoint. Windowed endpoints need the
/// resolved window and get `startDate` / `endDate` appended.
pub fn department_url(
    config: &ApiConfig,
    spec: &DepartmentSpec,
    window: Option<&SummaryWindow>,
) -> Result<String, String> {
    let base = api_url(config, spec.endpoint);
    if !spec.windowed_endpoint {
        return Ok(base);
    }
    let window = window.ok_or_else(|| format!("{} needs a date range", spec.title))?;
    let (start_date, end_date) = window.query_dates();
    let query = serde_qs::to_string(&WindowQuery {
        start_date,
        end_date,
    })
    .map_err(|e| format!("Failed to build query: {}", e))?;
    Ok(format!("{}?{}", base, query))
}

/// Fetches and normalizes one department's rows.
///
/// A `success:false` envelope is not an error here: it comes back as empty
/// rows with `failure` set. Transport and decoding problems are errors.
pub async fn fetch_department(
    spec: &'static DepartmentSpec,
    url: String,
    token: Option<String>,
) -> Result<LoadedRows, FetchFailure> {
    log::debug!("Loading {} from {}", spec.code, url);

    let mut request = Request::get(&url);
    if let Some(token) = token {
        request = request.header("Authorization", &bearer(&token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| FetchFailure::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchFailure::Status(response.status()));
    }

    let envelope: ApiEnvelope = response
        .json()
        .await
        .map_err(|e| FetchFailure::Decode(e.to_string()))?;

    let loaded = envelope.into_rows(spec.field_map);
    log::debug!("{}: {} rows", spec.code, loaded.rows.len());
    Ok(loaded)
}

/// Asks the backend to delete one record. The caller reloads afterwards.
pub async fn delete_record(
    config: &ApiConfig,
    spec: &'static DepartmentSpec,
    id: &str,
    token: Option<String>,
) -> Result<(), FetchFailure> {
    let url = format!("{}/{}", api_url(config, spec.endpoint), urlencoding::encode(id));
    let mut request = Request::delete(&url);
    if let Some(token) = token {
        request = request.header("Authorization", &bearer(&token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| FetchFailure::Network(e.to_string()))?;
    if !response.ok() {
        return Err(FetchFailure::Status(response.status()));
    }

    let envelope: ApiEnvelope = response
        .json()
        .await
        .map_err(|e| FetchFailure::Decode(e.to_string()))?;
    if envelope.success {
        Ok(())
    } else {
        Err(FetchFailure::Rejected(
            envelope
                .error
                .or(envelope.message)
                .unwrap_or_else(|| "Delete was not accepted".to_string()),
        ))
    }
}
