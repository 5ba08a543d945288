use leptos_router::ParamsMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const DEFAULT_AFTER_LOGIN: &str = "/dashboard";
pub const LOGIN_PATH: &str = "/login";

// Keep path separators readable in the address bar.
const REDIRECT_PARAM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn login_redirect_href(target: &str) -> String {
    format!(
        "{}?redirect={}",
        LOGIN_PATH,
        utf8_percent_encode(target, REDIRECT_PARAM)
    )
}

/// Only same-origin absolute paths survive; anything else lands on the dashboard.
pub fn sanitize_redirect(target: Option<&str>) -> String {
    match target.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with("/\\")
                && !path.chars().any(char::is_control) =>
        {
            path.to_string()
        }
        _ => DEFAULT_AFTER_LOGIN.to_string(),
    }
}

/// Post-login destination carried in the login page's `redirect` query parameter.
pub fn redirect_param(query: &ParamsMap) -> String {
    sanitize_redirect(query.get("redirect").map(String::as_str))
}

pub fn current_location_target() -> Option<String> {
    let location = web_sys::window()?.location();
    let path = location.pathname().ok()?;
    let search = location.search().unwrap_or_default();
    Some(format!("{}{}", path, search))
}

pub fn navigate_to(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(href) {
            log::error!("navigation to {} failed: {:?}", href, err);
        }
    }
}
