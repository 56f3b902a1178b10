use crate::auth::use_auth;
use crate::components::common::{Loadable, Notice, NoticeToast, load_into, view_signals};
use crate::components::layout::AdminShell;
use babu_erectors::forms::StatusFilter;
use babu_erectors::{ApiError, ViewState};
use babu_erectors_shared::{CareerApplication, CareerStatus, RESUME_CONTENT_TYPE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

fn badge(status: CareerStatus) -> &'static str {
    match status {
        CareerStatus::Pending => "badge badge-warning",
        CareerStatus::Shortlisted => "badge badge-success",
        CareerStatus::Rejected => "badge badge-error",
    }
}

/// 在新标签页打开已下载的简历，一分钟后释放对象 URL
fn open_pdf(bytes: &[u8]) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let bag = BlobPropertyBag::new();
    bag.set_type(RESUME_CONTENT_TYPE);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &bag)?;
    let url = Url::create_object_url_with_blob(&blob)?;
    window.open_with_url_and_target(&url, "_blank")?;
    set_timeout(
        move || {
            let _ = Url::revoke_object_url(&url);
        },
        Duration::from_secs(60),
    );
    Ok(())
}

fn open_url(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

/// 求职申请审阅
#[component]
pub fn CareersAdminPage() -> impl IntoView {
    let auth = use_auth();
    let notice = Notice::new();
    let state = RwSignal::new(ViewState::<Vec<CareerApplication>>::new());
    let filter = RwSignal::new(StatusFilter::<CareerStatus>::All);
    let (loading, error) = view_signals(state);

    let load = move || load_into(auth.client(), state, |c| async move { c.careers().get_all().await });
    load();

    let review = move |application: CareerApplication, status: CareerStatus| {
        let client = auth.client();
        spawn_local(async move {
            match client.careers().review(&application, status).await {
                Ok(()) => {
                    state.update(|s| {
                        s.update_data(|list| {
                            if let Some(a) = list.iter_mut().find(|a| a.id == application.id) {
                                a.status = status;
                            }
                        })
                    });
                    notice.success(format!("Application {}", status.as_str()));
                }
                Err(e) => notice.error(&e),
            }
        });
    };

    // 先带凭据下载；失败时退回直接打开下载地址
    let show_resume = move |id: String| {
        let client = auth.client();
        spawn_local(async move {
            let careers = client.careers();
            match careers.download_resume(&id).await {
                Ok(bytes) => {
                    if let Err(e) = open_pdf(&bytes) {
                        notice.failure(format!("Could not open resume: {:?}", e));
                    }
                }
                Err(e @ ApiError::AuthExpired { .. }) => notice.error(&e),
                Err(_) => open_url(&careers.get_resume_url(&id)),
            }
        });
    };

    let delete = move |id: String| {
        let client = auth.client();
        spawn_local(async move {
            match client.careers().delete(&id).await {
                Ok(()) => {
                    state.update(|s| s.update_data(|list| list.retain(|a| a.id != id)));
                    notice.success("Application deleted");
                }
                Err(e) => notice.error(&e),
            }
        });
    };

    let visible = move || {
        state.with(|s| {
            let items = s.data.as_deref().unwrap_or_default();
            filter.get().apply(items).into_iter().cloned().collect::<Vec<_>>()
        })
    };

    let filter_button = move |label: &'static str, value: StatusFilter<CareerStatus>| {
        view! {
            <button
                class=move || if filter.get() == value { "btn btn-sm btn-primary" } else { "btn btn-sm btn-ghost" }
                on:click=move |_| filter.set(value)
            >
                {label} " (" {move || state.with(|s| value.count(s.data.as_deref().unwrap_or_default()))} ")"
            </button>
        }
    };

    view! {
        <AdminShell title="Job Applications">
            <NoticeToast notice=notice />
            <div class="flex flex-wrap gap-2">
                {filter_button("All", StatusFilter::All)}
                {filter_button("Pending", StatusFilter::Only(CareerStatus::Pending))}
                {filter_button("Shortlisted", StatusFilter::Only(CareerStatus::Shortlisted))}
                {filter_button("Rejected", StatusFilter::Only(CareerStatus::Rejected))}
                <button class="btn btn-ghost btn-sm ml-auto" on:click=move |_| load()>"Refresh"</button>
            </div>

            <Loadable loading=loading error=error>
                <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                    <table class="table w-full">
                        <thead>
                            <tr>
                                <th>"Applicant"</th>
                                <th>"Position"</th>
                                <th class="hidden md:table-cell">"Experience"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=visible
                                key=|a| (a.id.clone(), a.status)
                                children=move |a| {
                                    let pending = a.status == CareerStatus::Pending;
                                    let (resume_id, del_id) = (a.id.clone(), a.id.clone());
                                    let (to_shortlist, to_reject) = (a.clone(), a.clone());
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="font-bold">{a.base.name.clone()}</div>
                                                <div class="text-sm opacity-60">{a.base.email.clone()} " · " {a.base.phone.clone()}</div>
                                            </td>
                                            <td>{a.base.position.clone()}</td>
                                            <td class="hidden md:table-cell">{a.base.experience.clone().unwrap_or_default()}</td>
                                            <td><span class=badge(a.status)>{a.status.as_str()}</span></td>
                                            <td class="flex gap-1 justify-end">
                                                <button class="btn btn-ghost btn-xs" on:click=move |_| show_resume(resume_id.clone())>
                                                    "Resume"
                                                </button>
                                                <Show when=move || pending>
                                                    <button class="btn btn-success btn-xs" on:click={
                                                        let application = to_shortlist.clone();
                                                        move |_| review(application.clone(), CareerStatus::Shortlisted)
                                                    }>"Shortlist"</button>
                                                    <button class="btn btn-warning btn-xs" on:click={
                                                        let application = to_reject.clone();
                                                        move |_| review(application.clone(), CareerStatus::Rejected)
                                                    }>"Reject"</button>
                                                </Show>
                                                <button class="btn btn-error btn-xs" on:click=move |_| delete(del_id.clone())>
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
                <Show when=move || visible().is_empty()>
                    <p class="text-center py-8 text-base-content/50">"No applications."</p>
                </Show>
            </Loadable>
        </AdminShell>
    }
}
