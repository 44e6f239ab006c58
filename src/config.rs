//! Frontend Configuration
//!
//! Read once at start-up from `<meta name="activity-board:*">` tags in
//! `index.html`, falling back to the page origin and built-in defaults.

use log::LevelFilter;

use crate::status::STATUS_HIDE_MS;

const META_API_BASE: &str = "activity-board:api-base";
const META_STATUS_MS: &str = "activity-board:status-ms";
const META_LOG_LEVEL: &str = "activity-board:log-level";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin the `/activities` endpoints live under
    pub api_base: String,
    /// Auto-hide delay for status messages
    pub status_hide_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            status_hide_ms: STATUS_HIDE_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build from the page origin and a meta-tag lookup.
    ///
    /// Unparseable values fall back to defaults.
    pub fn from_lookup(origin: &str, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let api_base = lookup(META_API_BASE)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(|v| resolve_against(origin, &v))
            .unwrap_or_else(|| origin.to_string());
        let status_hide_ms = lookup(META_STATUS_MS)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.status_hide_ms);
        let log_level = lookup(META_LOG_LEVEL)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        Self { api_base, status_hide_ms, log_level }
    }

    /// Read from the current document
    pub fn from_document() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let origin = window.location().origin().unwrap_or_default();
        let document = window.document();

        Self::from_lookup(&origin, |name| {
            let document = document.as_ref()?;
            let selector = format!(r#"meta[name="{}"]"#, name);
            document
                .query_selector(&selector)
                .ok()
                .flatten()
                .and_then(|meta| meta.get_attribute("content"))
        })
    }
}

/// Absolute URLs pass through; anything else is a path under `origin`
fn resolve_against(origin: &str, value: &str) -> String {
    if value.starts_with("http://") || value.starts_with("https://") {
        return value.to_string();
    }
    let origin = origin.trim_end_matches('/');
    let path = value.trim_start_matches('/');
    format!("{}/{}", origin, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_use_origin() {
        let config = AppConfig::from_lookup("http://localhost:8000", |_| None);
        assert_eq!(config.api_base, "http://localhost:8000");
        assert_eq!(config.status_hide_ms, 5_000);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_meta_overrides() {
        let config = AppConfig::from_lookup(
            "http://localhost:8000",
            lookup_from(&[
                (META_API_BASE, "https://api.example.org"),
                (META_STATUS_MS, " 2500 "),
                (META_LOG_LEVEL, "debug"),
            ]),
        );
        assert_eq!(config.api_base, "https://api.example.org");
        assert_eq!(config.status_hide_ms, 2_500);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_relative_api_base_resolves_against_origin() {
        let config = AppConfig::from_lookup("http://localhost:8000", lookup_from(&[(META_API_BASE, "/api")]));
        assert_eq!(config.api_base, "http://localhost:8000/api");

        let config = AppConfig::from_lookup("http://localhost:8000/", lookup_from(&[(META_API_BASE, "api/v1")]));
        assert_eq!(config.api_base, "http://localhost:8000/api/v1");
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_lookup(
            "http://origin",
            lookup_from(&[(META_API_BASE, "  "), (META_STATUS_MS, "soon"), (META_LOG_LEVEL, "loud")]),
        );
        assert_eq!(config.api_base, "http://origin");
        assert_eq!(config.status_hide_ms, 5_000);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
