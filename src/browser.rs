//! Browser Helpers
//!
//! Navigation, blocking notices and locale formatting.

use wasm_bindgen::JsValue;

use crate::logging::console_error;

/// Full page navigation
pub fn redirect(path: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().set_href(path) {
            console_error(&format!("[NAV] Redirect to {} failed: {:?}", path, e));
        }
    }
}

/// Blocking notice (form submissions only)
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// RFC 3339 timestamp in the browser's locale; unparsable input is shown as is
pub fn format_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return raw.to_string();
    }
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}
