//! Browser query-string access for URL sync.

use plaza_core::QueryParams;
use wasm_bindgen::JsValue;

/// The page's `location.search`, written back through `history.replaceState`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserQuery;

fn current_params() -> Option<web_sys::UrlSearchParams> {
    let window = web_sys::window()?;
    let search = window.location().search().unwrap_or_default();
    web_sys::UrlSearchParams::new_with_str(&search).ok()
}

/// Builds `pathname?query#hash`, dropping the `?` for an empty query.
pub(crate) fn compose_url(pathname: &str, query: &str, hash: &str) -> String {
    if query.is_empty() {
        format!("{pathname}{hash}")
    } else {
        format!("{pathname}?{query}{hash}")
    }
}

impl QueryParams for BrowserQuery {
    fn get(&self, key: &str) -> Option<String> {
        current_params()?.get(key)
    }

    fn replace(&mut self, key: &str, value: &str) {
        rewrite_params(|params| params.set(key, value));
    }

    fn remove(&mut self, key: &str) {
        rewrite_params(|params| params.delete(key));
    }
}

/// Applies `change` to the current query string and replaces the history
/// entry with the result.
fn rewrite_params(change: impl FnOnce(&web_sys::UrlSearchParams)) {
    let Some(window) = web_sys::window() else {
        tracing::warn!("No window; cannot update URL");
        return;
    };
    let Some(params) = current_params() else {
        tracing::warn!("Unreadable query string; URL left unchanged");
        return;
    };
    change(&params);

    let location = window.location();
    let new_url = compose_url(
        &location.pathname().unwrap_or_default(),
        &params.to_string().as_string().unwrap_or_default(),
        &location.hash().unwrap_or_default(),
    );

    let result = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url)));
    if let Err(e) = result {
        tracing::error!("Failed to replace history state: {:?}", e);
    }
}
