//! 公开站点页面

use crate::auth::use_auth;
use crate::components::common::{Field, Loadable, Notice, NoticeToast, load_into, view_signals};
use crate::components::layout::SiteShell;
use crate::web::router::Link;
use babu_erectors::forms::{CareerForm, ContactForm};
use babu_erectors::resources::ResumeFile;
use babu_erectors::{AppRoute, SubmitState, ViewState};
use babu_erectors_shared::{AboutContent, PROJECT_CATEGORIES, Project, Service};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SiteShell>
            <section class="hero min-h-[50vh] bg-base-200 rounded-box">
                <div class="hero-content text-center">
                    <div class="max-w-2xl space-y-4">
                        <h1 class="text-5xl font-bold">"Babu Erectors"</h1>
                        <p class="text-lg">
                            "Structural steel erection, fabrication and maintenance for steel plants, power plants and refineries."
                        </p>
                        <div class="flex gap-2 justify-center">
                            <Link route=AppRoute::Services class="btn btn-primary">"Our services"</Link>
                            <Link route=AppRoute::Contact class="btn btn-outline">"Get a quote"</Link>
                        </div>
                    </div>
                </div>
            </section>
        </SiteShell>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let auth = use_auth();
    let state = RwSignal::new(ViewState::<AboutContent>::new());
    let (loading, error) = view_signals(state);
    load_into(auth.client(), state, |c| async move { c.about().get().await });

    let about = move || state.with(|s| s.data.clone().unwrap_or_default());

    view! {
        <SiteShell>
            <Loadable loading=loading error=error>
                {move || {
                    let a = about();
                    view! {
                        <article class="prose max-w-none">
                            <h1>{a.hero_title.clone().unwrap_or_else(|| "About us".to_string())}</h1>
                            <p class="lead">{a.hero_description.clone()}</p>
                            <p>{a.about_content.clone()}</p>
                            {a.vision.clone().map(|v| view! { <h2>"Vision"</h2><p>{v}</p> })}
                            {a.mission.clone().map(|m| view! { <h2>"Mission"</h2><p>{m}</p> })}
                            {a.team_stats.map(|t| view! {
                                <div class="stats shadow not-prose">
                                    <div class="stat"><div class="stat-title">"Engineers"</div><div class="stat-value">{t.engineers}</div></div>
                                    <div class="stat"><div class="stat-title">"Supervisors"</div><div class="stat-value">{t.supervisors}</div></div>
                                    <div class="stat"><div class="stat-title">"Technicians"</div><div class="stat-value">{t.technicians}</div></div>
                                    <div class="stat"><div class="stat-title">"Years"</div><div class="stat-value">{t.years_experience}</div></div>
                                </div>
                            })}
                            <ul>
                                {a.certifications.into_iter().map(|c| view! { <li>{c}</li> }).collect_view()}
                            </ul>
                        </article>
                    }
                }}
            </Loadable>
        </SiteShell>
    }
}

// =========================================================
// 服务
// =========================================================

#[component]
pub fn ServicesPage() -> impl IntoView {
    let auth = use_auth();
    let state = RwSignal::new(ViewState::<Vec<Service>>::new());
    let (loading, error) = view_signals(state);
    load_into(auth.client(), state, |c| async move { c.services().get_all().await });

    let active = move || {
        state.with(|s| {
            let mut list: Vec<Service> = s
                .data
                .iter()
                .flatten()
                .filter(|x| x.base.is_active)
                .cloned()
                .collect();
            list.sort_by_key(|x| x.base.order);
            list
        })
    };

    view! {
        <SiteShell>
            <h1 class="text-4xl font-bold mb-6">"Our Services"</h1>
            <Loadable loading=loading error=error>
                <div class="grid md:grid-cols-3 gap-6">
                    {move || active()
                        .into_iter()
                        .map(|s| view! {
                            <Link route=AppRoute::ServiceDetails(s.base.slug.clone()) class="card bg-base-100 shadow hover:shadow-xl">
                                <div class="card-body">
                                    <span class="badge badge-primary">{s.icon_name().as_str()}</span>
                                    <h2 class="card-title">{s.base.title.clone()}</h2>
                                    <p>{s.base.description.clone()}</p>
                                </div>
                            </Link>
                        })
                        .collect_view()}
                </div>
            </Loadable>
        </SiteShell>
    }
}

#[component]
pub fn ServiceDetailsPage(id: String) -> impl IntoView {
    let auth = use_auth();
    let state = RwSignal::new(ViewState::<Service>::new());
    let (loading, error) = view_signals(state);
    load_into(auth.client(), state, move |c| async move { c.services().get_one(&id).await });

    view! {
        <SiteShell>
            <Loadable loading=loading error=error>
                {move || state.with(|s| s.data.clone()).map(|s| view! {
                    <article class="space-y-4">
                        <Link route=AppRoute::Services class="link">"← All services"</Link>
                        <h1 class="text-4xl font-bold">{s.base.title.clone()}</h1>
                        {s.base.image.clone().map(|src| view! { <img class="rounded-box" src=src alt="" /> })}
                        <p class="text-lg">{s.base.description.clone()}</p>
                        <ul class="list-disc list-inside">
                            {s.base.features.iter().map(|f| view! { <li>{f.clone()}</li> }).collect_view()}
                        </ul>
                        <Link route=AppRoute::Contact class="btn btn-primary">"Enquire about this service"</Link>
                    </article>
                })}
            </Loadable>
        </SiteShell>
    }
}

// =========================================================
// 项目
// =========================================================

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let auth = use_auth();
    let state = RwSignal::new(ViewState::<Vec<Project>>::new());
    let (loading, error) = view_signals(state);
    let category = RwSignal::new(Option::<&'static str>::None);

    // 切换分类时重新请求；较早的请求后返回也不会覆盖
    Effect::new(move |_| {
        let selected = category.get();
        load_into(auth.client(), state, move |c| async move {
            c.projects().get_all(selected).await
        });
    });

    let tab = move |label: &'static str, value: Option<&'static str>| {
        view! {
            <button
                class=move || if category.get() == value { "btn btn-sm btn-primary" } else { "btn btn-sm btn-ghost" }
                on:click=move |_| category.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <SiteShell>
            <h1 class="text-4xl font-bold mb-6">"Our Projects"</h1>
            <div class="flex flex-wrap gap-2 mb-6">
                {tab("All", None)}
                {PROJECT_CATEGORIES.into_iter().map(|c| tab(c, Some(c))).collect_view()}
            </div>
            <Loadable loading=loading error=error>
                <div class="grid md:grid-cols-3 gap-6">
                    {move || state
                        .with(|s| s.data.clone().unwrap_or_default())
                        .into_iter()
                        .filter(|p| p.base.is_active)
                        .map(|p| view! {
                            <Link route=AppRoute::ProjectDetails(p.id.clone()) class="card bg-base-100 shadow hover:shadow-xl">
                                <div class="card-body">
                                    <span class="badge badge-outline">{p.base.category.clone()}</span>
                                    <h2 class="card-title">{p.base.title.clone()}</h2>
                                    <p class="text-sm opacity-70">{p.base.client.clone()} " · " {p.base.location.clone()}</p>
                                </div>
                            </Link>
                        })
                        .collect_view()}
                </div>
            </Loadable>
        </SiteShell>
    }
}

#[component]
pub fn ProjectDetailsPage(id: String) -> impl IntoView {
    let auth = use_auth();
    let state = RwSignal::new(ViewState::<Project>::new());
    let (loading, error) = view_signals(state);
    load_into(auth.client(), state, move |c| async move { c.projects().get_one(&id).await });

    view! {
        <SiteShell>
            <Loadable loading=loading error=error>
                {move || state.with(|s| s.data.clone()).map(|p| view! {
                    <article class="space-y-4">
                        <Link route=AppRoute::Projects class="link">"← All projects"</Link>
                        <h1 class="text-4xl font-bold">{p.base.title.clone()}</h1>
                        {p.base.image.clone().map(|src| view! { <img class="rounded-box" src=src alt="" /> })}
                        <dl class="grid grid-cols-2 gap-2 max-w-md">
                            <dt class="font-bold">"Client"</dt><dd>{p.base.client.clone()}</dd>
                            <dt class="font-bold">"Category"</dt><dd>{p.base.category.clone()}</dd>
                            <dt class="font-bold">"Location"</dt><dd>{p.base.location.clone()}</dd>
                            <dt class="font-bold">"Duration"</dt><dd>{p.base.duration.clone()}</dd>
                        </dl>
                        <p>{p.base.description.clone()}</p>
                    </article>
                })}
            </Loadable>
        </SiteShell>
    }
}

// =========================================================
// 联系表单
// =========================================================

#[component]
pub fn ContactPage() -> impl IntoView {
    let auth = use_auth();
    let notice = Notice::new();
    let form = RwSignal::new(ContactForm::default());
    let submit = RwSignal::new(SubmitState::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let contact = match form.with_untracked(ContactForm::validate) {
            Ok(c) => c,
            Err(e) => return notice.error(&e),
        };
        if !submit.try_update(SubmitState::start).unwrap_or(false) {
            return;
        }
        let client = auth.client();
        spawn_local(async move {
            let result = client.contacts().submit(&contact).await;
            submit.update(|s| s.finish(&result));
            match result {
                Ok(()) => {
                    form.update(ContactForm::reset);
                    notice.success("Message sent successfully! We'll get back to you soon.");
                }
                Err(e) => notice.error(&e),
            }
        });
    };

    view! {
        <SiteShell>
            <NoticeToast notice=notice />
            <h1 class="text-4xl font-bold mb-6">"Contact Us"</h1>
            <Show when=move || submit.with(|s| s.submitted)>
                <div role="alert" class="alert alert-success mb-4">
                    <span>"Thank you! Check your email for a confirmation."</span>
                </div>
            </Show>
            <form class="card bg-base-100 shadow max-w-2xl" on:submit=on_submit>
                <div class="card-body grid md:grid-cols-2 gap-4">
                    <Field label="Name" required=true
                        value=move || form.with(|f| f.name.clone())
                        on_input=move |v: String| form.update(|f| f.name = v) />
                    <Field label="Email" kind="email" required=true
                        value=move || form.with(|f| f.email.clone())
                        on_input=move |v: String| form.update(|f| f.email = v) />
                    <Field label="Phone" kind="tel"
                        value=move || form.with(|f| f.phone.clone())
                        on_input=move |v: String| form.update(|f| f.phone = v) />
                    <Field label="Company"
                        value=move || form.with(|f| f.company.clone())
                        on_input=move |v: String| form.update(|f| f.company = v) />
                    <div class="md:col-span-2">
                        <Field label="Subject" required=true
                            value=move || form.with(|f| f.subject.clone())
                            on_input=move |v: String| form.update(|f| f.subject = v) />
                    </div>
                    <div class="md:col-span-2">
                        <Field label="Message" multiline=true required=true
                            value=move || form.with(|f| f.message.clone())
                            on_input=move |v: String| form.update(|f| f.message = v) />
                    </div>
                    <div class="card-actions md:col-span-2 justify-end">
                        <button class="btn btn-primary" disabled=move || submit.with(|s| s.submitting)>
                            {move || if submit.with(|s| s.submitting) { "Sending..." } else { "Send message" }}
                        </button>
                    </div>
                </div>
            </form>
        </SiteShell>
    }
}

// =========================================================
// 求职表单
// =========================================================

async fn read_resume(file: web_sys::File) -> Result<ResumeFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    Ok(ResumeFile {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn CareersPage() -> impl IntoView {
    let auth = use_auth();
    let notice = Notice::new();
    let form = RwSignal::new(CareerForm::default());
    let submit = RwSignal::new(SubmitState::new());
    let file_input = NodeRef::<leptos::html::Input>::new();

    // 每次选择文件递增，较早的读取晚到时丢弃
    let selection = StoredValue::new(0u64);

    let on_file = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let generation = selection.get_value() + 1;
        selection.set_value(generation);
        form.update(|f| f.resume = None);

        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // 先看类型和大小，通过后才把内容读进内存
        if let Err(e) = ResumeFile::check(&file.type_(), file.size() as u64) {
            input.set_value("");
            notice.error(&e);
            return;
        }
        spawn_local(async move {
            let result = read_resume(file).await;
            if selection.get_value() != generation {
                return;
            }
            match result {
                Ok(resume) => form.update(|f| f.resume = Some(resume)),
                Err(e) => notice.failure(format!("Could not read file: {}", e)),
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submission = match form.with_untracked(CareerForm::validate) {
            Ok(s) => s,
            Err(e) => return notice.error(&e),
        };
        if !submit.try_update(SubmitState::start).unwrap_or(false) {
            return;
        }
        let client = auth.client();
        spawn_local(async move {
            let result = client.careers().submit(submission).await;
            submit.update(|s| s.finish(&result));
            match result {
                Ok(()) => {
                    form.update(CareerForm::reset);
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                    notice.success("Application submitted! We'll review it and get back to you.");
                }
                Err(e) => notice.error(&e),
            }
        });
    };

    view! {
        <SiteShell>
            <NoticeToast notice=notice />
            <h1 class="text-4xl font-bold mb-2">"Careers"</h1>
            <p class="mb-6 opacity-70">"Fill out the form below and upload your resume (PDF, max 10MB)."</p>
            <Show when=move || submit.with(|s| s.submitted)>
                <div role="alert" class="alert alert-success mb-4">
                    <span>"Your application has been received."</span>
                </div>
            </Show>
            <form class="card bg-base-100 shadow max-w-2xl" on:submit=on_submit>
                <div class="card-body grid md:grid-cols-2 gap-4">
                    <Field label="Full name" required=true
                        value=move || form.with(|f| f.name.clone())
                        on_input=move |v: String| form.update(|f| f.name = v) />
                    <Field label="Email" kind="email" required=true
                        value=move || form.with(|f| f.email.clone())
                        on_input=move |v: String| form.update(|f| f.email = v) />
                    <Field label="Phone" kind="tel" required=true
                        value=move || form.with(|f| f.phone.clone())
                        on_input=move |v: String| form.update(|f| f.phone = v) />
                    <Field label="Position" required=true
                        value=move || form.with(|f| f.position.clone())
                        on_input=move |v: String| form.update(|f| f.position = v) />
                    <Field label="Experience"
                        value=move || form.with(|f| f.experience.clone())
                        on_input=move |v: String| form.update(|f| f.experience = v) />
                    <label class="form-control w-full">
                        <span class="label-text mb-1">"Resume (PDF)"</span>
                        <input
                            node_ref=file_input
                            type="file"
                            accept=".pdf,application/pdf"
                            class="file-input file-input-bordered w-full"
                            on:change=on_file
                        />
                        <span class="label-text-alt mt-1">
                            {move || form.with(|f| f.resume.as_ref().map(|r| r.file_name.clone()))}
                        </span>
                    </label>
                    <div class="md:col-span-2">
                        <Field label="Cover letter" multiline=true
                            value=move || form.with(|f| f.cover_letter.clone())
                            on_input=move |v: String| form.update(|f| f.cover_letter = v) />
                    </div>
                    <div class="card-actions md:col-span-2 justify-end">
                        <button class="btn btn-primary" disabled=move || submit.with(|s| s.submitting)>
                            {move || if submit.with(|s| s.submitting) { "Submitting..." } else { "Submit application" }}
                        </button>
                    </div>
                </div>
            </form>
        </SiteShell>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl">"Page not found"</p>
                <Link route=AppRoute::Home class="btn btn-primary">"Back to home"</Link>
            </div>
        </div>
    }
}
