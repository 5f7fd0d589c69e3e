//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::models::CurrentUser;

/// Reload signal for a page's lists
#[derive(Clone, Copy)]
pub struct ListContext {
    /// Trigger to reload lists from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload lists from the server - write
    set_reload_trigger: WriteSignal<u32>,
}

impl ListContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a reload of the lists
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Everything a page needs from the session, passed down explicitly
#[derive(Clone)]
pub struct PageContext {
    pub api: HttpApi,
    pub user: CurrentUser,
}
