use crate::auth::use_auth;
use crate::components::common::{Loadable, Notice, NoticeToast, load_into, view_signals};
use crate::components::layout::AdminShell;
use babu_erectors::ViewState;
use babu_erectors::forms::StatusFilter;
use babu_erectors_shared::{ContactStatus, ContactSubmission};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn parse_filter(value: &str) -> StatusFilter<ContactStatus> {
    ContactStatus::parse(value)
        .map(StatusFilter::Only)
        .unwrap_or_default()
}

/// 联系留言管理
#[component]
pub fn ContactsPage() -> impl IntoView {
    let auth = use_auth();
    let notice = Notice::new();
    let state = RwSignal::new(ViewState::<Vec<ContactSubmission>>::new());
    let filter = RwSignal::new(StatusFilter::<ContactStatus>::All);
    let (loading, error) = view_signals(state);

    let load = move || load_into(auth.client(), state, |c| async move { c.contacts().get_all().await });
    load();

    let set_status = move |id: String, status: ContactStatus| {
        let client = auth.client();
        spawn_local(async move {
            match client.contacts().update_status(&id, status).await {
                Ok(()) => {
                    state.update(|s| {
                        s.update_data(|list| {
                            if let Some(c) = list.iter_mut().find(|c| c.id == id) {
                                c.status = status;
                            }
                        })
                    });
                    notice.success("Status updated");
                }
                Err(e) => notice.error(&e),
            }
        });
    };

    let delete = move |id: String| {
        let client = auth.client();
        spawn_local(async move {
            match client.contacts().delete(&id).await {
                Ok(()) => {
                    state.update(|s| s.update_data(|list| list.retain(|c| c.id != id)));
                    notice.success("Message deleted");
                }
                Err(e) => notice.error(&e),
            }
        });
    };

    let visible = move || {
        state.with(|s| {
            let items = s.data.as_deref().unwrap_or_default();
            filter
                .get()
                .apply(items)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <AdminShell title="Contact Messages">
            <NoticeToast notice=notice />
            <div class="flex gap-2 items-center">
                <select
                    class="select select-bordered"
                    on:change=move |ev| filter.set(parse_filter(&event_target_value(&ev)))
                >
                    <option value="all">"All"</option>
                    {ContactStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect_view()}
                </select>
                <button class="btn btn-ghost btn-sm" on:click=move |_| load()>"Refresh"</button>
            </div>

            <Loadable loading=loading error=error>
                <div class="space-y-4">
                    <For
                        each=visible
                        key=|c| (c.id.clone(), c.status)
                        children=move |c| {
                            let id = c.id.clone();
                            let del_id = c.id.clone();
                            view! {
                                <div class="card bg-base-100 shadow">
                                    <div class="card-body">
                                        <div class="flex justify-between">
                                            <div>
                                                <h3 class="card-title">{c.base.subject.clone()}</h3>
                                                <p class="text-sm text-base-content/70">
                                                    {c.base.name.clone()} " <" {c.base.email.clone()} ">"
                                                    {c.base.phone.clone().map(|p| format!(" · {}", p))}
                                                    {c.base.company.clone().map(|co| format!(" · {}", co))}
                                                </p>
                                            </div>
                                            <span class="badge badge-outline">{c.status.as_str()}</span>
                                        </div>
                                        <p class="whitespace-pre-line">{c.base.message.clone()}</p>
                                        <div class="card-actions justify-end">
                                            <select
                                                class="select select-bordered select-sm"
                                                on:change=move |ev| {
                                                    if let Some(s) = ContactStatus::parse(&event_target_value(&ev)) {
                                                        set_status(id.clone(), s);
                                                    }
                                                }
                                            >
                                                {ContactStatus::ALL
                                                    .into_iter()
                                                    .map(|s| view! {
                                                        <option value=s.as_str() selected={s == c.status}>{s.as_str()}</option>
                                                    })
                                                    .collect_view()}
                                            </select>
                                            <button class="btn btn-error btn-sm" on:click=move |_| delete(del_id.clone())>
                                                "Delete"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    />
                    <Show when=move || visible().is_empty()>
                        <p class="text-center py-8 text-base-content/50">"No messages."</p>
                    </Show>
                </div>
            </Loadable>
        </AdminShell>
    }
}
