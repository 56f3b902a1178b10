//! Babu Erectors 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `web::router`: 路由服务（守卫规则来自核心库）
//! - `auth`: 会话状态与唯一的 API 客户端
//! - `components`: 页面与 UI 组件

mod auth;
mod components {
    pub mod about;
    pub mod careers;
    pub mod common;
    pub mod contacts;
    pub mod dashboard;
    pub mod layout;
    pub mod login;
    pub mod projects;
    pub mod public;
    pub mod services;
}

use crate::auth::AuthContext;
use crate::components::about::AboutEditorPage;
use crate::components::careers::CareersAdminPage;
use crate::components::contacts::ContactsPage;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::projects::ProjectsAdminPage;
use crate::components::public::{
    AboutPage, CareersPage, ContactPage, HomePage, NotFoundPage, ProjectDetailsPage,
    ProjectsPage, ServiceDetailsPage, ServicesPage,
};
use crate::components::services::ServicesAdminPage;

use babu_erectors::AppRoute;
use leptos::prelude::*;

// 浏览器 API 封装：存储、fetch 传输、History 路由
pub(crate) mod web {
    mod http;
    mod log;
    pub mod router;
    mod storage;

    pub use http::FetchHttpClient;
    pub use log::init_logging;
    pub use storage::BrowserStorage;
}

pub use web::init_logging;

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::About => view! { <AboutPage /> }.into_any(),
        AppRoute::Services => view! { <ServicesPage /> }.into_any(),
        AppRoute::ServiceDetails(id) => view! { <ServiceDetailsPage id=id /> }.into_any(),
        AppRoute::Projects => view! { <ProjectsPage /> }.into_any(),
        AppRoute::ProjectDetails(id) => view! { <ProjectDetailsPage id=id /> }.into_any(),
        AppRoute::Contact => view! { <ContactPage /> }.into_any(),
        AppRoute::Careers => view! { <CareersPage /> }.into_any(),
        AppRoute::AdminLogin => view! { <LoginPage /> }.into_any(),
        AppRoute::AdminDashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::AdminServices => view! { <ServicesAdminPage /> }.into_any(),
        AppRoute::AdminProjects => view! { <ProjectsAdminPage /> }.into_any(),
        AppRoute::AdminAbout => view! { <AboutEditorPage /> }.into_any(),
        AppRoute::AdminContacts => view! { <ContactsPage /> }.into_any(),
        AppRoute::AdminCareers => view! { <CareersAdminPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文（从 LocalStorage 恢复会话）
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 401 时刷新认证信号，路由守卫负责跳转
    auth_ctx.watch_expiry();

    // 3. 认证信号注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
