use crate::auth::use_auth;
use crate::components::common::{Field, Loadable, Notice, NoticeToast, load_into, view_signals};
use crate::components::layout::AdminShell;
use babu_erectors::forms::ServiceForm;
use babu_erectors::{SubmitState, ViewState};
use babu_erectors_shared::{IconName, Service};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 服务管理：列表 + 新建/编辑表单
#[component]
pub fn ServicesAdminPage() -> impl IntoView {
    let auth = use_auth();
    let notice = Notice::new();
    let state = RwSignal::new(ViewState::<Vec<Service>>::new());
    let (loading, error) = view_signals(state);

    let form = RwSignal::new(ServiceForm::default());
    // 正在编辑的服务 id，None 表示新建
    let editing = RwSignal::new(Option::<String>::None);
    let submit = RwSignal::new(SubmitState::new());

    let load = move || load_into(auth.client(), state, |c| async move { c.services().get_all().await });
    load();

    let reset = move || {
        form.update(ServiceForm::reset);
        editing.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = match form.with_untracked(ServiceForm::validate) {
            Ok(input) => input,
            Err(e) => return notice.error(&e),
        };
        if !submit.try_update(SubmitState::start).unwrap_or(false) {
            return;
        }
        let client = auth.client();
        let id = editing.get_untracked();
        spawn_local(async move {
            let result = match &id {
                Some(id) => client.services().update(id, &input).await,
                None => client.services().create(&input).await,
            };
            submit.update(|s| s.finish(&result));
            match result {
                Ok(_) => {
                    notice.success(if id.is_some() { "Service updated" } else { "Service created" });
                    reset();
                    load();
                }
                Err(e) => notice.error(&e),
            }
        });
    };

    let edit = move |service: Service| {
        form.set(ServiceForm::from_service(&service));
        editing.set(Some(service.id));
    };

    let delete = move |id: String| {
        let client = auth.client();
        spawn_local(async move {
            match client.services().delete(&id).await {
                Ok(()) => {
                    state.update(|s| s.update_data(|list| list.retain(|x| x.id != id)));
                    notice.success("Service deleted");
                }
                Err(e) => notice.error(&e),
            }
        });
    };

    let items = move || state.with(|s| s.data.clone().unwrap_or_default());

    view! {
        <AdminShell title="Services">
            <NoticeToast notice=notice />

            <form class="card bg-base-100 shadow" on:submit=on_submit>
                <div class="card-body grid md:grid-cols-2 gap-4">
                    <h2 class="card-title md:col-span-2">
                        {move || if editing.with(Option::is_some) { "Edit service" } else { "New service" }}
                    </h2>
                    <Field label="Service ID (slug)" required=true
                        value=move || form.with(|f| f.slug.clone())
                        on_input=move |v: String| form.update(|f| f.slug = v) />
                    <Field label="Title" required=true
                        value=move || form.with(|f| f.title.clone())
                        on_input=move |v: String| form.update(|f| f.title = v) />
                    <div class="md:col-span-2">
                        <Field label="Description" multiline=true required=true
                            value=move || form.with(|f| f.description.clone())
                            on_input=move |v: String| form.update(|f| f.description = v) />
                    </div>
                    <Field label="Image URL"
                        value=move || form.with(|f| f.image.clone())
                        on_input=move |v: String| form.update(|f| f.image = v) />
                    <label class="form-control w-full">
                        <span class="label-text mb-1">"Icon"</span>
                        <select
                            class="select select-bordered"
                            on:change=move |ev| form.update(|f| f.icon = event_target_value(&ev))
                            prop:value=move || form.with(|f| f.icon.clone())
                        >
                            <option value="">"Default"</option>
                            {IconName::ALL
                                .into_iter()
                                .map(|i| view! { <option value=i.as_str()>{i.as_str()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <div class="md:col-span-2">
                        <Field label="Features (one per line)" multiline=true
                            value=move || form.with(|f| f.features.clone())
                            on_input=move |v: String| form.update(|f| f.features = v) />
                    </div>
                    <Field label="Order" kind="number"
                        value=move || form.with(|f| f.order.to_string())
                        on_input=move |v: String| form.update(|f| f.order = v.parse().unwrap_or_default()) />
                    <label class="label cursor-pointer justify-start gap-2">
                        <input type="checkbox" class="checkbox"
                            prop:checked=move || form.with(|f| f.is_active)
                            on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev)) />
                        <span class="label-text">"Active"</span>
                    </label>
                    <div class="card-actions md:col-span-2 justify-end">
                        <button type="button" class="btn btn-ghost" on:click=move |_| reset()>"Cancel"</button>
                        <button class="btn btn-primary" disabled=move || submit.with(|s| s.submitting)>
                            {move || if editing.with(Option::is_some) { "Update" } else { "Create" }}
                        </button>
                    </div>
                </div>
            </form>

            <Loadable loading=loading error=error>
                <div class="grid md:grid-cols-2 gap-4">
                    {move || items()
                        .into_iter()
                        .map(|service| {
                            let icon = service.icon_name();
                            let active = service.base.is_active;
                            let del_id = service.id.clone();
                            let to_edit = service.clone();
                            view! {
                                <div class="card bg-base-100 shadow">
                                    <div class="card-body">
                                        <div class="flex justify-between items-start">
                                            <h3 class="card-title">{service.base.title.clone()}</h3>
                                            <span class="badge badge-ghost">{icon.as_str()}</span>
                                        </div>
                                        <p class="text-sm opacity-70">"/" {service.base.slug.clone()} " · order " {service.base.order}</p>
                                        <p>{service.base.description.clone()}</p>
                                        <ul class="list-disc list-inside text-sm">
                                            {service.base.features.iter().map(|f| view! { <li>{f.clone()}</li> }).collect_view()}
                                        </ul>
                                        <div class="card-actions justify-end">
                                            {(!active).then(|| view! { <span class="badge badge-warning">"Inactive"</span> })}
                                            <button class="btn btn-sm" on:click=move |_| edit(to_edit.clone())>"Edit"</button>
                                            <button class="btn btn-error btn-sm" on:click=move |_| delete(del_id.clone())>"Delete"</button>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Loadable>
        </AdminShell>
    }
}
