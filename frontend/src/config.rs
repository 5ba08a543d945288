use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

pub const DEFAULT_HTTP_SERVER_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(alias = "HTTP_SERVER_URL")]
    pub http_server_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no browser window available")]
    NoWindow,
    #[error("failed to fetch runtime config: {0}")]
    Fetch(String),
    #[error("runtime config responded with status {0}")]
    Status(u16),
    #[error("failed to parse runtime config: {0}")]
    Parse(String),
}

static HTTP_SERVER_URL: OnceLock<String> = OnceLock::new();

/// Trims whitespace and trailing slashes so endpoint paths can be appended verbatim.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn get_from_env_js() -> Option<String> {
    // Optional global object: window.__SLOTSWAPPER_ENV = { HTTP_SERVER_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__SLOTSWAPPER_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"HTTP_SERVER_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"http_server_url".into()).ok());
    val.and_then(|v| v.as_string())
        .and_then(|s| normalize_base_url(&s))
}

fn get_from_build_env() -> Option<String> {
    option_env!("SLOTSWAPPER_HTTP_SERVER_URL").and_then(normalize_base_url)
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = HTTP_SERVER_URL.set(value.clone());
    value
}

async fn fetch_runtime_config() -> Result<RuntimeConfig, ConfigError> {
    let origin = web_sys::window()
        .ok_or(ConfigError::NoWindow)?
        .location()
        .origin()
        .map_err(|_| ConfigError::NoWindow)?;
    let resp = reqwest::get(format!("{}/config.json", origin))
        .await
        .map_err(|e| ConfigError::Fetch(e.to_string()))?;
    if !resp.status().is_success() {
        return Err(ConfigError::Status(resp.status().as_u16()));
    }
    resp.json::<RuntimeConfig>()
        .await
        .map_err(|e| ConfigError::Parse(e.to_string()))
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = HTTP_SERVER_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = get_from_env_js() {
        return cache_base_url(&existing);
    }
    match fetch_runtime_config().await {
        Ok(cfg) => {
            if let Some(url) = cfg.http_server_url.as_deref().and_then(normalize_base_url) {
                return cache_base_url(&url);
            }
        }
        Err(err) => log::debug!("runtime config unavailable: {}", err),
    }
    if let Some(url) = get_from_build_env() {
        return cache_base_url(&url);
    }
    log::warn!(
        "HTTP_SERVER_URL not configured, falling back to {}",
        DEFAULT_HTTP_SERVER_URL
    );
    cache_base_url(DEFAULT_HTTP_SERVER_URL)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("Backend base URL: {}", url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url(" https://api.example.com// ").as_deref(),
            Some("https://api.example.com")
        );
        assert_eq!(
            normalize_base_url("http://localhost:8080").as_deref(),
            Some("http://localhost:8080")
        );
    }

    #[test]
    fn normalize_base_url_rejects_blank() {
        assert!(normalize_base_url("   ").is_none());
        assert!(normalize_base_url("/").is_none());
    }

    #[test]
    fn runtime_config_accepts_upper_and_lower_keys() {
        let lower: RuntimeConfig =
            serde_json::from_str(r#"{"http_server_url":"https://a.example"}"#).unwrap();
        let upper: RuntimeConfig =
            serde_json::from_str(r#"{"HTTP_SERVER_URL":"https://b.example"}"#).unwrap();
        assert_eq!(lower.http_server_url.as_deref(), Some("https://a.example"));
        assert_eq!(upper.http_server_url.as_deref(), Some("https://b.example"));
    }

    #[test]
    fn config_error_messages_are_descriptive() {
        assert_eq!(
            ConfigError::Status(404).to_string(),
            "runtime config responded with status 404"
        );
    }
}
