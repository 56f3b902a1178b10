use crate::auth::use_auth;
use crate::components::layout::AdminShell;
use crate::web::router::Link;
use babu_erectors::AppRoute;
use babu_erectors::dashboard::DashboardStats;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
fn StatCard(label: &'static str, value: Signal<usize>, route: AppRoute) -> impl IntoView {
    view! {
        <Link route=route class="stat bg-base-100 rounded-box shadow hover:shadow-lg">
            <div class="stat-title">{label}</div>
            <div class="stat-value text-primary">{move || value.get()}</div>
        </Link>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let stats = RwSignal::new(DashboardStats::default());
    let (loading, set_loading) = signal(true);

    let load = move || {
        let client = auth.client();
        set_loading.set(true);
        spawn_local(async move {
            stats.set(DashboardStats::load(&client).await);
            set_loading.set(false);
        });
    };
    load();

    let field = move |f: fn(&DashboardStats) -> usize| Signal::derive(move || stats.with(f));

    view! {
        <AdminShell title="Dashboard">
            <div class="flex justify-end">
                <button on:click=move |_| load() disabled=move || loading.get() class="btn btn-ghost btn-sm">
                    {move || if loading.get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <StatCard label="Contact messages" value=field(|s| s.contacts) route=AppRoute::AdminContacts />
                <StatCard label="Services" value=field(|s| s.services) route=AppRoute::AdminServices />
                <StatCard label="Projects" value=field(|s| s.projects) route=AppRoute::AdminProjects />
                <StatCard label="Job applications" value=field(|s| s.careers) route=AppRoute::AdminCareers />
            </div>
        </AdminShell>
    }
}
