//! Browser location and history helpers.
//!
//! Reads the initial path and query parameters, keeps the address bar in
//! step with the visible view, and reports back/forward navigation.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use keeper_types::{KeeperError, Result, route::Route};

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| KeeperError::JsInterop("No window object".to_string()))
}

fn js_err(e: JsValue) -> KeeperError {
    KeeperError::JsInterop(format!("{:?}", e))
}

fn pathname() -> Result<String> {
    window()?.location().pathname().map_err(js_err)
}

/// Current query string, `?` included, or empty
fn search() -> String {
    window()
        .and_then(|w| w.location().search().map_err(js_err))
        .unwrap_or_default()
}

/// Route for the current `location.pathname`
pub fn current_route() -> Route {
    pathname().map(|path| Route::parse(&path)).unwrap_or_default()
}

/// Route for the current path, rewriting the address bar in place when the
/// path was not the route's canonical form (e.g. `/foo` becomes `/`)
pub fn canonical_route() -> Route {
    let route = current_route();
    if let Ok(path) = pathname() {
        if !Route::is_canonical(&path) {
            log::info!("Rewriting {} to {}", path, route.path());
            if let Err(e) = replace_route(&route) {
                log::warn!("Could not rewrite location: {}", e);
            }
        }
    }
    route
}

/// Value of a query-string parameter, e.g. `?api=http://host:8000`
pub fn query_param(name: &str) -> Option<String> {
    let params = web_sys::UrlSearchParams::new_with_str(&search()).ok()?;
    params.get(name).filter(|v| !v.trim().is_empty())
}

/// Record a view change in the browser history, keeping the query string
pub fn push_route(route: &Route) -> Result<()> {
    let history = window()?.history().map_err(js_err)?;
    history
        .push_state_with_url(&JsValue::NULL, "", Some(&route.url_with_search(&search())))
        .map_err(js_err)
}

/// Replace the current history entry, keeping the query string
pub fn replace_route(route: &Route) -> Result<()> {
    let history = window()?.history().map_err(js_err)?;
    history
        .replace_state_with_url(&JsValue::NULL, "", Some(&route.url_with_search(&search())))
        .map_err(js_err)
}

/// Call `on_change` with the new route whenever the user goes back or
/// forward. The listener lives as long as the page.
pub fn on_popstate(on_change: impl Fn(Route) + 'static) -> Result<()> {
    let onpopstate = Closure::wrap(Box::new(move || {
        on_change(current_route());
    }) as Box<dyn FnMut()>);
    window()?.set_onpopstate(Some(onpopstate.as_ref().unchecked_ref()));
    onpopstate.forget();
    Ok(())
}
