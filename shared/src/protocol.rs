//! REST endpoint definitions.
//!
//! Every collection path the site talks to is built here, so the client and
//! the admin panel never format URLs by hand.

use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A method plus a path relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: String,
}

fn seg(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

impl Endpoint {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    // --- Contact ---

    pub fn contact_submit() -> Self {
        Self::new(HttpMethod::Post, "/contact")
    }

    pub fn contact_list() -> Self {
        Self::new(HttpMethod::Get, "/contact")
    }

    pub fn contact_get(id: &str) -> Self {
        Self::new(HttpMethod::Get, format!("/contact/{}", seg(id)))
    }

    pub fn contact_status(id: &str) -> Self {
        Self::new(HttpMethod::Patch, format!("/contact/{}/status", seg(id)))
    }

    pub fn contact_delete(id: &str) -> Self {
        Self::new(HttpMethod::Delete, format!("/contact/{}", seg(id)))
    }

    // --- Services ---

    pub fn service_list() -> Self {
        Self::new(HttpMethod::Get, "/services")
    }

    pub fn service_get(id: &str) -> Self {
        Self::new(HttpMethod::Get, format!("/services/{}", seg(id)))
    }

    pub fn service_create() -> Self {
        Self::new(HttpMethod::Post, "/services")
    }

    pub fn service_update(id: &str) -> Self {
        Self::new(HttpMethod::Put, format!("/services/{}", seg(id)))
    }

    pub fn service_delete(id: &str) -> Self {
        Self::new(HttpMethod::Delete, format!("/services/{}", seg(id)))
    }

    // --- Projects ---

    /// `None` 列出全部项目，否则按分类精确过滤
    pub fn project_list(category: Option<&str>) -> Self {
        match category {
            Some(c) => Self::new(
                HttpMethod::Get,
                format!("/projects?category={}", urlencoding::encode(c)),
            ),
            None => Self::new(HttpMethod::Get, "/projects"),
        }
    }

    pub fn project_get(id: &str) -> Self {
        Self::new(HttpMethod::Get, format!("/projects/{}", seg(id)))
    }

    pub fn project_create() -> Self {
        Self::new(HttpMethod::Post, "/projects")
    }

    pub fn project_update(id: &str) -> Self {
        Self::new(HttpMethod::Put, format!("/projects/{}", seg(id)))
    }

    pub fn project_delete(id: &str) -> Self {
        Self::new(HttpMethod::Delete, format!("/projects/{}", seg(id)))
    }

    // --- About ---

    pub fn about_get() -> Self {
        Self::new(HttpMethod::Get, "/about")
    }

    pub fn about_update() -> Self {
        Self::new(HttpMethod::Put, "/about")
    }

    // --- Auth ---

    pub fn auth_login() -> Self {
        Self::new(HttpMethod::Post, "/auth/login")
    }

    pub fn auth_me() -> Self {
        Self::new(HttpMethod::Get, "/auth/me")
    }

    // --- Careers ---

    pub fn career_submit() -> Self {
        Self::new(HttpMethod::Post, "/careers")
    }

    pub fn career_list() -> Self {
        Self::new(HttpMethod::Get, "/careers")
    }

    pub fn career_get(id: &str) -> Self {
        Self::new(HttpMethod::Get, format!("/careers/{}", seg(id)))
    }

    pub fn career_status(id: &str) -> Self {
        Self::new(HttpMethod::Patch, format!("/careers/{}/status", seg(id)))
    }

    pub fn career_delete(id: &str) -> Self {
        Self::new(HttpMethod::Delete, format!("/careers/{}", seg(id)))
    }

    /// Direct download link; fetched by the browser, not through the JSON client.
    pub fn career_resume(id: &str) -> Self {
        Self::new(HttpMethod::Get, Self::career_resume_path(id))
    }

    pub fn career_resume_path(id: &str) -> String {
        format!("/careers/{}/resume", seg(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_filter_is_percent_encoded() {
        let ep = Endpoint::project_list(Some("Steel Plants"));
        assert_eq!(ep.method, HttpMethod::Get);
        assert_eq!(ep.path, "/projects?category=Steel%20Plants");
        assert_eq!(Endpoint::project_list(None).path, "/projects");
    }

    #[test]
    fn status_endpoints_use_patch() {
        assert_eq!(Endpoint::contact_status("a1").path, "/contact/a1/status");
        assert_eq!(Endpoint::contact_status("a1").method, HttpMethod::Patch);
        assert_eq!(Endpoint::career_status("b2").method, HttpMethod::Patch);
    }

    #[test]
    fn resume_path() {
        assert_eq!(Endpoint::career_resume_path("b2"), "/careers/b2/resume");
        assert_eq!(Endpoint::career_resume("b2").method, HttpMethod::Get);
    }
}
