//! Department page: loads the rows once per selection and feeds both the
//! table and the summary strip from the same signal.

use super::summary::DepartmentSummary;
use super::table::DepartmentTable;
use crate::departments::api::{delete_record, department_url, fetch_department};
use crate::shared::app_config::use_app_config;
use crate::shared::table_view::use_table_view;
use crate::system::auth::context::use_session;
use chrono::Utc;
use contracts::domain::departments::{self, DepartmentSpec};
use contracts::shared::envelope::{FetchFailure, LoadStatus};
use contracts::shared::record::Record;
use contracts::shared::request_token::{RequestToken, RequestTracker};
use contracts::shared::summary::{RangeSelector, SelectorOutcome, SummaryWindow};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

/// Window to send to the backend, if the department's endpoint takes one.
fn request_window(spec: &DepartmentSpec, outcome: &SelectorOutcome) -> Option<SummaryWindow> {
    match outcome {
        SelectorOutcome::Ready(window) if spec.windowed_endpoint => Some(*window),
        _ => None,
    }
}

/// Notice for a finished delete. Failures are dropped once a newer load
/// or an unmount has moved the tracker past `seen`.
fn delete_notice(
    tracker: &RequestTracker,
    seen: RequestToken,
    id: &str,
    result: &Result<(), FetchFailure>,
) -> Option<String> {
    match result {
        Err(e) if tracker.is_current(seen) => Some(format!("Failed to delete {}: {}", id, e)),
        _ => None,
    }
}

const CLOCK_TICK_MS: u32 = 60_000;

/// Route component for `/departments/:code`.
#[component]
pub fn DepartmentPage() -> impl IntoView {
    let params = use_params_map();
    let code = Memo::new(move |_| params.with(|p| p.get("code").unwrap_or_default()));

    // Re-rendered per code so each department gets fresh state
    move || match departments::find(&code.get()) {
        Some(spec) => view! { <DepartmentView spec=spec /> }.into_any(),
        None => {
            log::warn!("Unknown department '{}'", code.get_untracked());
            view! { <p class="not-found">{format!("Unknown department '{}'", code.get_untracked())}</p> }
                .into_any()
        }
    }
}

#[component]
fn DepartmentView(spec: &'static DepartmentSpec) -> impl IntoView {
    let config = use_app_config();
    let session = use_session();
    let offset = config.summary.offset();

    let rows = RwSignal::new(Vec::<Record>::new());
    let status = RwSignal::new(LoadStatus::Idle);
    let table = use_table_view(rows.into(), config.table.rows_per_page);

    let reload = RwSignal::new(0u32);
    let notice = RwSignal::new(None::<String>);

    // Re-resolves "today" after midnight; the memo only fires when the window moves
    let clock = RwSignal::new(0u32);
    // Dropped (and cancelled) with the page's owner
    let _ticker = StoredValue::new_local(Interval::new(CLOCK_TICK_MS, move || {
        clock.try_update(|n| *n = n.wrapping_add(1));
    }));

    let selector = RwSignal::new(RangeSelector::new(config.summary.default_mode));
    let outcome = Memo::new(move |_| {
        clock.track();
        reload.track();
        selector.with(|s| s.outcome(Utc::now(), offset))
    });
    let window = Memo::new(move |_| outcome.with(|o| request_window(spec, o)));

    // Responses landing after a newer fetch or after unmount are dropped
    let tracker = RequestTracker::new();
    {
        let tracker = tracker.clone();
        on_cleanup(move || tracker.invalidate());
    }

    {
        let api = config.api.clone();
        let tracker = tracker.clone();
        Effect::new(move |_| {
            reload.track();
            let window = window.get();

            let url = match department_url(&api, spec, window.as_ref()) {
                Ok(url) => url,
                Err(reason) => {
                    tracker.invalidate();
                    rows.set(Vec::new());
                    status.set(LoadStatus::Failed(reason));
                    return;
                }
            };

            let token = tracker.issue();
            let auth = session.with_untracked(|s| s.token().map(str::to_string));
            status.set(LoadStatus::Loading);
            notice.set(None);

            let tracker = tracker.clone();
            spawn_local(async move {
                let result = fetch_department(spec, url, auth).await;
                if !tracker.is_current(token) {
                    log::debug!("{}: dropping stale response #{}", spec.code, token.value());
                    return;
                }

                status.set(LoadStatus::from_result(&result));
                match result {
                    Ok(loaded) => {
                        if let Some(failure) = &loaded.failure {
                            log::warn!("{}: backend reported failure: {}", spec.code, failure);
                        }
                        if loaded.skipped > 0 {
                            log::warn!("{}: skipped {} malformed entries", spec.code, loaded.skipped);
                        }
                        rows.set(loaded.rows);
                    }
                    Err(e) => {
                        log::error!("{}: fetch failed: {}", spec.code, e);
                        rows.set(Vec::new());
                    }
                }
            });
        });
    }

    let on_delete = {
        let api = config.api.clone();
        let tracker = tracker.clone();
        Callback::new(move |id: String| {
            if table.delete_row(&id).is_none() {
                log::warn!("{}: no record with id {}", spec.code, id);
                return;
            }
            let api = api.clone();
            let tracker = tracker.clone();
            let seen = tracker.current();
            let auth = session.with_untracked(|s| s.token().map(str::to_string));
            spawn_local(async move {
                let result = delete_record(&api, spec, &id, auth).await;
                match &result {
                    Ok(()) => {
                        log::info!("{}: deleted {}", spec.code, id);
                        // Disposed once the page is gone
                        reload.try_update(|n| *n += 1);
                    }
                    Err(e) => log::error!("{}: delete of {} failed: {}", spec.code, id, e),
                }
                if let Some(message) = delete_notice(&tracker, seen, &id, &result) {
                    notice.set(Some(message));
                }
            });
        })
    };

    view! {
        <div class="department-page">
            <div class="department-page__header">
                <h1>{spec.title}</h1>
                <button
                    class="department-page__refresh"
                    title="Reload"
                    disabled=move || status.with(|s| s.is_loading())
                    on:click=move |_| reload.update(|n| *n += 1)
                >
                    {crate::shared::icons::icon("refresh")}
                </button>
            </div>

            {move || {
                notice
                    .get()
                    .map(|message| {
                        view! {
                            <div class="department-page__notice" role="alert">
                                <span>{message}</span>
                                <button
                                    class="department-page__notice-close"
                                    title="Dismiss"
                                    on:click=move |_| notice.set(None)
                                >
                                    {crate::shared::icons::icon("x")}
                                </button>
                            </div>
                        }
                    })
            }}

            <Show when=move || spec.has_summary()>
                <DepartmentSummary spec=spec rows=rows selector=selector outcome=outcome offset=offset />
            </Show>

            <DepartmentTable
                spec=spec
                table=table
                status=status
                page_size_options=config.table.page_size_options.clone()
                offset=offset
                on_delete=on_delete
            />
        </div>
    }
}
