//! Page Routing
//!
//! Maps the browser path to the page to mount. Navigation is always a full
//! page load, so there is no client-side history handling.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Todos,
    Completed,
    Blogs,
    BlogNew,
    BlogEdit(u32),
    BlogDetail(u32),
    Login,
    Register,
    NotFound,
}

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const BLOGS_PATH: &str = "/blogs";

impl Route {
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Todos,
            ["completed"] => Route::Completed,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["blogs"] => Route::Blogs,
            ["blogs", "new"] => Route::BlogNew,
            ["blogs", "edit", id] => id.parse().map(Route::BlogEdit).unwrap_or(Route::NotFound),
            ["blogs", id] => id.parse().map(Route::BlogDetail).unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }

    pub fn current() -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self::parse(&path)
    }

    /// Pages other than login/register need a session
    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Todos | Route::NotFound => HOME_PATH.to_string(),
            Route::Completed => "/completed".to_string(),
            Route::Blogs => BLOGS_PATH.to_string(),
            Route::BlogNew => "/blogs/new".to_string(),
            Route::BlogEdit(id) => format!("/blogs/edit/{}", id),
            Route::BlogDetail(id) => format!("/blogs/{}", id),
            Route::Login => LOGIN_PATH.to_string(),
            Route::Register => "/register".to_string(),
        }
    }
}
