//! Build-time client configuration with an optional runtime override.
//!
//! The API base URL comes from `AUTHFORM_API_BASE_URL` at compile time and
//! may be replaced at runtime through `window.AUTHFORM_CONFIG.api_base_url`,
//! so a static deployment can point at another backend without rebuilding.
//! An empty base means same-origin requests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Route of the login view.
pub const LOGIN_PATH: &str = "/login";
/// Route of the signup view.
pub const SIGNUP_PATH: &str = "/signup";
/// Route users land on after login.
pub const HOME_PATH: &str = "/";

/// Endpoint path for account creation.
pub const SIGN_UP_ENDPOINT: &str = "/api/sign-up";
/// Endpoint path for credential exchange.
pub const LOG_IN_ENDPOINT: &str = "/api/log-in";

/// Frontend configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    /// Loads config from the build environment and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self {
            api_base_url: normalize_base_url(option_env!("AUTHFORM_API_BASE_URL").unwrap_or("")),
        };
        if let Some(base) = runtime_api_base_url() {
            config.api_base_url = normalize_base_url(&base);
        }
        config
    }

    /// Join the configured base with an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

#[cfg(feature = "hydrate")]
fn runtime_api_base_url() -> Option<String> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("AUTHFORM_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    Reflect::get(&config, &JsValue::from_str("api_base_url"))
        .ok()?
        .as_string()
        .filter(|value| !value.trim().is_empty())
}

#[cfg(not(feature = "hydrate"))]
fn runtime_api_base_url() -> Option<String> {
    None
}
