//! Console Logging
//!
//! Browser console on wasm; stderr elsewhere so unit tests can run natively.
//! Messages carry a bracketed component tag, e.g. `[TODO]`.

#[cfg(target_arch = "wasm32")]
pub fn console_log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn console_error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_log(msg: &str) {
    eprintln!("{}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_error(msg: &str) {
    eprintln!("{}", msg);
}
