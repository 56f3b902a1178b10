use crate::auth::use_auth;
use crate::components::common::{Field, Loadable, Notice, NoticeToast, load_into, view_signals};
use crate::components::layout::AdminShell;
use babu_erectors::forms::ProjectForm;
use babu_erectors::{SubmitState, ViewState};
use babu_erectors_shared::{PROJECT_CATEGORIES, Project};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 预设分类，加上正在编辑的项目已有的其他分类
fn category_options(current: &str) -> Vec<String> {
    let mut options: Vec<String> = PROJECT_CATEGORIES.iter().map(|c| c.to_string()).collect();
    if !current.trim().is_empty() && !options.iter().any(|c| c == current) {
        options.push(current.to_string());
    }
    options
}

/// 项目管理
#[component]
pub fn ProjectsAdminPage() -> impl IntoView {
    let auth = use_auth();
    let notice = Notice::new();
    let state = RwSignal::new(ViewState::<Vec<Project>>::new());
    let (loading, error) = view_signals(state);

    let form = RwSignal::new(ProjectForm::default());
    let editing = RwSignal::new(Option::<String>::None);
    let submit = RwSignal::new(SubmitState::new());

    let load = move || load_into(auth.client(), state, |c| async move { c.projects().get_all(None).await });
    load();

    let reset = move || {
        form.update(ProjectForm::reset);
        editing.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = match form.with_untracked(ProjectForm::validate) {
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
                Some(id) => client.projects().update(id, &input).await,
                None => client.projects().create(&input).await,
            };
            submit.update(|s| s.finish(&result));
            match result {
                Ok(_) => {
                    notice.success(if id.is_some() { "Project updated" } else { "Project created" });
                    reset();
                    load();
                }
                Err(e) => notice.error(&e),
            }
        });
    };

    let edit = move |project: Project| {
        form.set(ProjectForm::from_project(&project));
        editing.set(Some(project.id));
    };

    let delete = move |id: String| {
        let client = auth.client();
        spawn_local(async move {
            match client.projects().delete(&id).await {
                Ok(()) => {
                    state.update(|s| s.update_data(|list| list.retain(|p| p.id != id)));
                    notice.success("Project deleted");
                }
                Err(e) => notice.error(&e),
            }
        });
    };

    let items = move || state.with(|s| s.data.clone().unwrap_or_default());

    view! {
        <AdminShell title="Projects">
            <NoticeToast notice=notice />

            <form class="card bg-base-100 shadow" on:submit=on_submit>
                <div class="card-body grid md:grid-cols-2 gap-4">
                    <h2 class="card-title md:col-span-2">
                        {move || if editing.with(Option::is_some) { "Edit project" } else { "New project" }}
                    </h2>
                    <Field label="Title" required=true
                        value=move || form.with(|f| f.title.clone())
                        on_input=move |v: String| form.update(|f| f.title = v) />
                    <Field label="Client" required=true
                        value=move || form.with(|f| f.client.clone())
                        on_input=move |v: String| form.update(|f| f.client = v) />
                    <label class="form-control w-full">
                        <span class="label-text mb-1">"Category"</span>
                        <select
                            class="select select-bordered"
                            on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                            prop:value=move || form.with(|f| f.category.clone())
                        >
                            {move || {
                                let current = form.with(|f| f.category.clone());
                                category_options(&current)
                                    .into_iter()
                                    .map(|c| {
                                        let selected = c == current;
                                        view! { <option value=c.clone() selected=selected>{c}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <Field label="Location" required=true
                        value=move || form.with(|f| f.location.clone())
                        on_input=move |v: String| form.update(|f| f.location = v) />
                    <Field label="Duration" required=true
                        value=move || form.with(|f| f.duration.clone())
                        on_input=move |v: String| form.update(|f| f.duration = v) />
                    <Field label="Image URL"
                        value=move || form.with(|f| f.image.clone())
                        on_input=move |v: String| form.update(|f| f.image = v) />
                    <div class="md:col-span-2">
                        <Field label="Description" multiline=true required=true
                            value=move || form.with(|f| f.description.clone())
                            on_input=move |v: String| form.update(|f| f.description = v) />
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
                <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                    <table class="table w-full">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Client"</th>
                                <th>"Category"</th>
                                <th class="hidden md:table-cell">"Location"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || items()
                                .into_iter()
                                .map(|project| {
                                    let del_id = project.id.clone();
                                    let to_edit = project.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                {project.base.title.clone()}
                                                {(!project.base.is_active).then(|| view! { <span class="badge badge-warning ml-2">"Inactive"</span> })}
                                            </td>
                                            <td>{project.base.client.clone()}</td>
                                            <td>{project.base.category.clone()}</td>
                                            <td class="hidden md:table-cell">{project.base.location.clone()}</td>
                                            <td class="flex gap-1 justify-end">
                                                <button class="btn btn-xs" on:click=move |_| edit(to_edit.clone())>"Edit"</button>
                                                <button class="btn btn-error btn-xs" on:click=move |_| delete(del_id.clone())>"Delete"</button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </Loadable>
        </AdminShell>
    }
}
