use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

use hvs_shared::{SystemDetail, SystemRecord};

/// Compile-time endpoint override; the deploy pipeline rebuilds per
/// environment.
const BASE_URL_OVERRIDE: Option<&str> = option_env!("HVS_API_BASE_URL");
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Per-attempt abort deadline. A backend that never answers must not pin the
/// home page in its loading state.
const FETCH_TIMEOUT_MS: u32 = 5_000;
/// The systems list gates the home page out of Loading, so it gets a second
/// attempt before degrading to "no data".
const LIST_FETCH_ATTEMPTS: u32 = 2;
const RETRY_DELAY_MS: u32 = 500;

pub fn base_url() -> &'static str {
    BASE_URL_OVERRIDE
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
}

/// Resolve a backend-relative static path ("/static/docs/...", "/static/videos/...")
/// into an absolute URL.
pub fn resolve_static_url(path: &str) -> String {
    format!("{}{}", base_url(), path)
}

/// One GET with a JSON-decoded body and an abort deadline covering the whole
/// attempt, body download included. The timer clears when the attempt
/// finishes either way.
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let controller = web_sys::AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());
    let _abort_timer = controller.map(|c| Timeout::new(FETCH_TIMEOUT_MS, move || c.abort()));

    let resp = gloo_net::http::Request::get(url)
        .abort_signal(signal.as_ref())
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<T>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

/// Fetch the systems list. Degrades to an empty list after logging every
/// failed attempt; callers never see an error.
pub async fn fetch_systems() -> Vec<SystemRecord> {
    let url = format!("{}/api/systems", base_url());
    for attempt in 1..=LIST_FETCH_ATTEMPTS {
        match get_json::<Vec<SystemRecord>>(&url).await {
            Ok(records) => return records,
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("Systems fetch failed (attempt {attempt}/{LIST_FETCH_ATTEMPTS}): {e}")
                        .into(),
                );
                if attempt < LIST_FETCH_ATTEMPTS {
                    TimeoutFuture::new(RETRY_DELAY_MS).await;
                }
            }
        }
    }
    Vec::new()
}

/// Fetch one system's detail payload. `None` on any failure (logged); pages
/// simply hide the detail-driven actions.
pub async fn fetch_system_detail(id: &str) -> Option<SystemDetail> {
    let url = format!("{}/api/systems/{id}", base_url());
    match get_json::<SystemDetail>(&url).await {
        Ok(detail) => Some(detail),
        Err(e) => {
            web_sys::console::warn_1(&format!("System detail fetch failed for {id}: {e}").into());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!base_url().ends_with('/'));
        assert!(base_url().starts_with("http"));
    }

    #[test]
    fn static_urls_join_base_and_path_verbatim() {
        assert_eq!(
            resolve_static_url("/static/docs/hvs-umea.pdf"),
            format!("{}/static/docs/hvs-umea.pdf", base_url())
        );
    }
}
