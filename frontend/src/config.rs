use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";
const DEFAULT_AFTER_LOGIN_URL: &str = "/";

const ENV_GLOBAL: &str = "__ACCOUNT_PORTAL_ENV";
const CONFIG_GLOBAL: &str = "__ACCOUNT_PORTAL_CONFIG";

/// One layer of runtime configuration. Every field is optional so layers can
/// be merged: env.js, the window config object, then `config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub after_login_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub after_login_url: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            after_login_url: DEFAULT_AFTER_LOGIN_URL.to_string(),
        }
    }
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

/// Merges layers in order; the first layer that sets a field wins.
pub fn resolve(layers: &[RuntimeConfig]) -> ResolvedConfig {
    let pick = |field: fn(&RuntimeConfig) -> Option<&String>| {
        layers
            .iter()
            .filter_map(field)
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
            .map(str::to_string)
    };
    let defaults = ResolvedConfig::default();
    ResolvedConfig {
        api_base_url: normalize_base_url(
            &pick(|c| c.api_base_url.as_ref()).unwrap_or(defaults.api_base_url),
        ),
        after_login_url: pick(|c| c.after_login_url.as_ref()).unwrap_or(defaults.after_login_url),
    }
}

pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn read_string(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn read_global(name: &str) -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    Some(RuntimeConfig {
        api_base_url: read_string(&obj, &["API_BASE_URL", "api_base_url"]),
        after_login_url: read_string(&obj, &["AFTER_LOGIN_URL", "after_login_url"]),
    })
}

fn write_window_config(cfg: &RuntimeConfig) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let fields = [
        ("api_base_url", cfg.api_base_url.as_ref()),
        ("after_login_url", cfg.after_login_url.as_ref()),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            let _ = js_sys::Reflect::set(
                &obj,
                &key.into(),
                &wasm_bindgen::JsValue::from_str(value),
            );
        }
    }
    let _ = js_sys::Reflect::set(&window, &CONFIG_GLOBAL.into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_runtime_config() -> ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    let mut layers: Vec<RuntimeConfig> = [ENV_GLOBAL, CONFIG_GLOBAL]
        .iter()
        .filter_map(|name| read_global(name))
        .collect();
    if layers.iter().all(|l| l.api_base_url.is_none()) {
        if let Some(cfg) = fetch_runtime_config().await {
            write_window_config(&cfg);
            layers.push(cfg);
        }
    }
    let resolved = resolve(&layers);
    log::debug!("runtime config resolved: api_base_url={}", resolved.api_base_url);
    RESOLVED.get_or_init(|| resolved).clone()
}

pub async fn await_api_base_url() -> String {
    await_runtime_config().await.api_base_url
}

/// Cached post-login URL, or the default before `init` has finished.
pub fn after_login_url() -> String {
    RESOLVED
        .get()
        .map(|c| c.after_login_url.clone())
        .unwrap_or_else(|| DEFAULT_AFTER_LOGIN_URL.to_string())
}

pub async fn init() {
    let _ = await_runtime_config().await;
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn read_global_accepts_upper_and_lower_case_keys() {
        let window = web_sys::window().unwrap();
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"API_BASE_URL".into(), &"https://env.example".into()).unwrap();
        js_sys::Reflect::set(&obj, &"after_login_url".into(), &"/home".into()).unwrap();
        js_sys::Reflect::set(&window, &ENV_GLOBAL.into(), &obj).unwrap();

        let cfg = read_global(ENV_GLOBAL).expect("env global");
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://env.example"));
        assert_eq!(cfg.after_login_url.as_deref(), Some("/home"));
    }

    #[wasm_bindgen_test]
    fn read_global_returns_none_when_missing() {
        assert!(read_global("__ACCOUNT_PORTAL_MISSING").is_none());
    }
}
