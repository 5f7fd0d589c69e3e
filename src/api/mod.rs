//! REST API Client
//!
//! Same-origin `fetch` wrappers, organized by domain.

mod todo;
mod blog;
mod auth;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::logging::console_error;

pub use todo::*;
pub use blog::*;

/// Handle to the server API; `Copy` so it can move into every handler
#[derive(Clone, Copy)]
pub struct HttpApi {
    config: StoredValue<ClientConfig>,
}

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config: StoredValue::new(config) }
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    fn url(&self, path: &str) -> String {
        self.config.with_value(|c| c.url(path))
    }

    /// Issue a request; non-success statuses become `ApiError::Status`
    async fn send(&self, method: &str, path: &str, body: Option<String>) -> ApiResult<Response> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_credentials(RequestCredentials::SameOrigin);
        let has_body = body.is_some();
        if let Some(body) = body {
            opts.set_body(&JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(&self.url(path), &opts)
            .map_err(|e| ApiError::Network(js_message(&e)))?;
        if has_body {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(|e| ApiError::Network(js_message(&e)))?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Network(js_message(&e)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|e| ApiError::Decode(js_message(&e)))?;

        if !response.ok() {
            let body = read_text(&response).await.unwrap_or_default();
            let err = ApiError::from_status(response.status(), &body);
            console_error(&format!("[API] {} {} failed: {}", method, path, err));
            return Err(err);
        }
        Ok(response)
    }

    async fn send_json<B: serde::Serialize>(&self, method: &str, path: &str, body: &B) -> ApiResult<Response> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send(method, path, Some(body)).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send("GET", path, None).await?;
        decode(&response).await
    }

    pub(crate) async fn post<B: serde::Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let response = self.send_json("POST", path, body).await?;
        decode(&response).await
    }

    pub(crate) async fn put<B: serde::Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let response = self.send_json("PUT", path, body).await?;
        decode(&response).await
    }

    /// Status-only call with a JSON body
    pub(crate) async fn post_status<B: serde::Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.send_json("POST", path, body).await.map(|_| ())
    }

    /// Status-only call without a body
    pub(crate) async fn call(&self, method: &str, path: &str) -> ApiResult<()> {
        self.send(method, path, None).await.map(|_| ())
    }
}

async fn read_text(response: &Response) -> ApiResult<String> {
    let promise = response.text().map_err(|e| ApiError::Decode(js_message(&e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(js_message(&e)))?;
    Ok(value.as_string().unwrap_or_default())
}

async fn decode<T: DeserializeOwned>(response: &Response) -> ApiResult<T> {
    let promise = response.json().map_err(|e| ApiError::Decode(js_message(&e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(js_message(&e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
