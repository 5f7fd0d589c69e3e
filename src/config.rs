//! Client Configuration
//!
//! Read once from `data-*` attributes on the host page's `<body>`:
//! - `data-api-base`: prefix for every request path (default: same origin)
//! - `data-send-priority`: include the target tier in reorder requests

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base: String,
    pub send_priority_on_reorder: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            send_priority_on_reorder: false,
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl ClientConfig {
    /// Build from an attribute lookup
    pub fn from_attrs(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: get("data-api-base")
                .map(|base| base.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            send_priority_on_reorder: get("data-send-priority")
                .map(|raw| parse_flag(&raw))
                .unwrap_or(defaults.send_priority_on_reorder),
        }
    }

    pub fn from_document() -> Self {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        match body {
            Some(body) => Self::from_attrs(|name| body.get_attribute(name)),
            None => Self::default(),
        }
    }

    /// Absolute request URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}
