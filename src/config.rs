//! Runtime Configuration
//!
//! Picks the todo service transport from the host page:
//! `<meta name="todo-api" content="tauri">` or `content="<base url>"`.
//! Without the meta tag the Tauri bridge is used when present, else HTTP at `/api`.

use wasm_bindgen::JsValue;

/// Name of the `<meta>` tag carrying the transport setting
pub const META_NAME: &str = "todo-api";

/// Default HTTP base when nothing is configured
pub const DEFAULT_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Tauri,
    Http { base_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub backend: Backend,
}

impl ApiConfig {
    /// Resolve the configuration from raw page values.
    ///
    /// `origin` is used to absolutize a path-only base such as `/api`.
    pub fn resolve(meta: Option<&str>, tauri_present: bool, origin: &str) -> Self {
        let setting = meta.map(str::trim).filter(|s| !s.is_empty());
        let backend = match setting {
            Some(s) if s.eq_ignore_ascii_case("tauri") => Backend::Tauri,
            Some(base) => Backend::Http { base_url: absolutize(base, origin) },
            None if tauri_present => Backend::Tauri,
            None => Backend::Http { base_url: absolutize(DEFAULT_BASE, origin) },
        };
        Self { backend }
    }

    /// Read the configuration from the current document
    pub fn from_document() -> Self {
        let window = web_sys::window();
        let meta = window
            .as_ref()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&format!("meta[name=\"{}\"]", META_NAME)).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        let tauri_present = window
            .as_ref()
            .and_then(|w| js_sys::Reflect::get(w, &JsValue::from_str("__TAURI__")).ok())
            .map(|v| !v.is_undefined() && !v.is_null())
            .unwrap_or(false);
        let origin = window
            .as_ref()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();

        let config = Self::resolve(meta.as_deref(), tauri_present, &origin);
        log::debug!("[CONFIG] meta={:?} tauri={} -> {:?}", meta, tauri_present, config);
        config
    }
}

/// Resolve `base` against the page origin and trim trailing slashes.
///
/// `//host/x` takes the origin's scheme, `/x` and `x` hang off the origin,
/// anything with a scheme is kept as is.
fn absolutize(base: &str, origin: &str) -> String {
    let base = base.trim_end_matches('/');
    let origin = origin.trim_end_matches('/');
    if base.contains("://") {
        base.to_string()
    } else if base.starts_with("//") {
        let scheme = origin.split_once("//").map(|(scheme, _)| scheme).unwrap_or("https:");
        format!("{}{}", scheme, base)
    } else if base.is_empty() || base.starts_with('/') {
        format!("{}{}", origin, base)
    } else {
        format!("{}/{}", origin, base.trim_start_matches("./"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://localhost:8080";

    #[test]
    fn test_meta_url_selects_http() {
        let config = ApiConfig::resolve(Some("http://host/api/"), true, ORIGIN);
        assert_eq!(config.backend, Backend::Http { base_url: "http://host/api".to_string() });
    }

    #[test]
    fn test_meta_tauri_selects_ipc() {
        let config = ApiConfig::resolve(Some(" Tauri "), false, ORIGIN);
        assert_eq!(config.backend, Backend::Tauri);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ApiConfig::resolve(None, true, ORIGIN).backend, Backend::Tauri);
        assert_eq!(
            ApiConfig::resolve(None, false, ORIGIN).backend,
            Backend::Http { base_url: "http://localhost:8080/api".to_string() }
        );
        // Blank meta behaves as absent
        assert_eq!(ApiConfig::resolve(Some("  "), true, ORIGIN).backend, Backend::Tauri);
    }

    #[test]
    fn test_relative_base_uses_origin() {
        let config = ApiConfig::resolve(Some("/v1/"), false, "https://todo.example/");
        assert_eq!(config.backend, Backend::Http { base_url: "https://todo.example/v1".to_string() });
    }

    #[test]
    fn test_scheme_relative_base_takes_origin_scheme() {
        let config = ApiConfig::resolve(Some("//api.example.com/v1"), false, "https://app.example");
        assert_eq!(config.backend, Backend::Http { base_url: "https://api.example.com/v1".to_string() });
    }

    #[test]
    fn test_bare_base_is_relative_to_origin() {
        for meta in ["api", "./api/"] {
            let config = ApiConfig::resolve(Some(meta), false, ORIGIN);
            assert_eq!(config.backend, Backend::Http { base_url: "http://localhost:8080/api".to_string() });
        }
    }
}
