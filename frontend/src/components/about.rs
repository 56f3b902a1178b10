use crate::auth::use_auth;
use crate::components::common::{Field, Loadable, Notice, NoticeToast, load_into, view_signals};
use crate::components::layout::AdminShell;
use babu_erectors::{SubmitState, ViewState};
use babu_erectors_shared::{AboutContent, TeamStats};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn opt(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// "关于我们" 编辑器
///
/// 文档整体替换：先载入完整内容，只改动表单里的字段，其余原样写回。
#[component]
pub fn AboutEditorPage() -> impl IntoView {
    let auth = use_auth();
    let notice = Notice::new();
    let state = RwSignal::new(ViewState::<AboutContent>::new());
    let (loading, error) = view_signals(state);
    let draft = RwSignal::new(AboutContent::default());
    let submit = RwSignal::new(SubmitState::new());

    load_into(auth.client(), state, |c| async move { c.about().get().await });

    // 载入完成后用服务端内容初始化草稿
    Effect::new(move |_| {
        if let Some(content) = state.with(|s| s.data.clone()) {
            draft.set(content);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !submit.try_update(SubmitState::start).unwrap_or(false) {
            return;
        }
        let client = auth.client();
        let content = draft.get_untracked();
        spawn_local(async move {
            let result = client.about().update(&content).await;
            submit.update(|s| s.finish(&result));
            match result {
                Ok(saved) => {
                    state.update(|s| s.data = Some(saved));
                    notice.success("About page saved");
                }
                Err(e) => notice.error(&e),
            }
        });
    };

    let stat = move |get: fn(&TeamStats) -> u32, set: fn(&mut TeamStats, u32)| {
        (
            move || draft.with(|d| d.team_stats.as_ref().map(get).unwrap_or_default().to_string()),
            move |v: String| {
                draft.update(|d| set(d.team_stats.get_or_insert_with(TeamStats::default), v.parse().unwrap_or_default()))
            },
        )
    };
    let (engineers, set_engineers) = stat(|t| t.engineers, |t, v| t.engineers = v);
    let (supervisors, set_supervisors) = stat(|t| t.supervisors, |t, v| t.supervisors = v);
    let (technicians, set_technicians) = stat(|t| t.technicians, |t, v| t.technicians = v);
    let (years, set_years) = stat(|t| t.years_experience, |t, v| t.years_experience = v);

    view! {
        <AdminShell title="About Page">
            <NoticeToast notice=notice />
            <Loadable loading=loading error=error>
                <form class="card bg-base-100 shadow" on:submit=on_submit>
                    <div class="card-body grid md:grid-cols-2 gap-4">
                        <Field label="Hero title"
                            value=move || draft.with(|d| text(&d.hero_title))
                            on_input=move |v: String| draft.update(|d| d.hero_title = opt(v)) />
                        <Field label="Hero description"
                            value=move || draft.with(|d| text(&d.hero_description))
                            on_input=move |v: String| draft.update(|d| d.hero_description = opt(v)) />
                        <div class="md:col-span-2">
                            <Field label="About" multiline=true
                                value=move || draft.with(|d| text(&d.about_content))
                                on_input=move |v: String| draft.update(|d| d.about_content = opt(v)) />
                        </div>
                        <Field label="Vision" multiline=true
                            value=move || draft.with(|d| text(&d.vision))
                            on_input=move |v: String| draft.update(|d| d.vision = opt(v)) />
                        <Field label="Mission" multiline=true
                            value=move || draft.with(|d| text(&d.mission))
                            on_input=move |v: String| draft.update(|d| d.mission = opt(v)) />
                        <div class="md:col-span-2">
                            <Field label="Certifications (one per line)" multiline=true
                                value=move || draft.with(|d| d.certifications.join("\n"))
                                on_input=move |v: String| draft.update(|d| {
                                    d.certifications = v
                                        .lines()
                                        .map(str::trim)
                                        .filter(|l| !l.is_empty())
                                        .map(String::from)
                                        .collect()
                                }) />
                        </div>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 md:col-span-2">
                            <Field label="Engineers" kind="number" value=engineers on_input=set_engineers />
                            <Field label="Supervisors" kind="number" value=supervisors on_input=set_supervisors />
                            <Field label="Technicians" kind="number" value=technicians on_input=set_technicians />
                            <Field label="Years of experience" kind="number" value=years on_input=set_years />
                        </div>
                        <div class="card-actions md:col-span-2 justify-end">
                            <button class="btn btn-primary" disabled=move || submit.with(|s| s.submitting)>
                                "Save"
                            </button>
                        </div>
                    </div>
                </form>
            </Loadable>
        </AdminShell>
    }
}
