use crate::auth::{logout, use_auth};
use crate::web::router::Link;
use babu_erectors::AppRoute;
use leptos::prelude::*;

const ADMIN_LINKS: [(AppRoute, &str); 6] = [
    (AppRoute::AdminDashboard, "Dashboard"),
    (AppRoute::AdminContacts, "Contacts"),
    (AppRoute::AdminCareers, "Careers"),
    (AppRoute::AdminServices, "Services"),
    (AppRoute::AdminProjects, "Projects"),
    (AppRoute::AdminAbout, "About"),
];

/// 后台页面外壳：顶栏、导航、登出
#[component]
pub fn AdminShell(title: &'static str, children: Children) -> impl IntoView {
    let auth = use_auth();
    let on_logout = move |_| logout(auth);

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <span class="text-xl font-bold px-2">"Babu Erectors Admin"</span>
                        <span class="badge badge-neutral hidden md:inline-flex">
                            {move || auth.username.get().unwrap_or_default()}
                        </span>
                    </div>
                    <div class="flex-none gap-2">
                        <button on:click=on_logout class="btn btn-outline btn-error">
                            "Logout"
                        </button>
                    </div>
                </div>

                <div class="tabs tabs-boxed bg-base-100">
                    {ADMIN_LINKS
                        .into_iter()
                        .map(|(route, label)| view! { <Link route=route class="tab">{label}</Link> })
                        .collect_view()}
                </div>

                <h1 class="text-3xl font-bold">{title}</h1>
                {children()}
            </div>
        </div>
    }
}

/// 公开站点外壳
#[component]
pub fn SiteShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <header class="navbar bg-base-100 shadow">
                <div class="flex-1">
                    <Link route=AppRoute::Home class="btn btn-ghost text-xl">"Babu Erectors"</Link>
                </div>
                <nav class="flex-none gap-1">
                    <Link route=AppRoute::About class="btn btn-ghost">"About"</Link>
                    <Link route=AppRoute::Services class="btn btn-ghost">"Services"</Link>
                    <Link route=AppRoute::Projects class="btn btn-ghost">"Projects"</Link>
                    <Link route=AppRoute::Careers class="btn btn-ghost">"Careers"</Link>
                    <Link route=AppRoute::Contact class="btn btn-primary">"Contact"</Link>
                </nav>
            </header>
            <main class="flex-1 container mx-auto px-4 py-8">{children()}</main>
            <footer class="footer footer-center p-4 bg-base-200 text-base-content/70">
                <p>"Babu Erectors Pvt. Ltd."</p>
            </footer>
        </div>
    }
}
