//! 页面共用的小组件与加载工具

use crate::auth::Client;
use babu_erectors::{ApiError, ApiResult, ViewState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::rc::Rc;

/// 把一次资源加载接到 `ViewState` 上
///
/// 每次调用取一个新序号，较早发起的请求即使后返回也不会覆盖结果。
pub fn load_into<T, F, Fut>(client: Rc<Client>, state: RwSignal<ViewState<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: FnOnce(Rc<Client>) -> Fut + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let Some(ticket) = state.try_update(|s| s.begin()) else {
        return;
    };
    spawn_local(async move {
        let result = fetch(client).await;
        state.update(|s| {
            s.finish(ticket, result);
        });
    });
}

// =========================================================
// 通知
// =========================================================

/// 右上角的临时通知，3 秒后自动消失
#[derive(Clone, Copy)]
pub struct Notice(RwSignal<Option<(String, bool)>>);

impl Notice {
    pub fn new() -> Self {
        let inner = RwSignal::new(None);
        Effect::new(move |_| {
            if inner.with(Option::is_some) {
                set_timeout(move || inner.set(None), std::time::Duration::from_secs(3));
            }
        });
        Self(inner)
    }

    pub fn success(&self, msg: impl Into<String>) {
        self.0.set(Some((msg.into(), false)));
    }

    pub fn failure(&self, msg: impl Into<String>) {
        self.0.set(Some((msg.into(), true)));
    }

    pub fn error(&self, err: &ApiError) {
        self.failure(err.user_message());
    }
}

#[component]
pub fn NoticeToast(notice: Notice) -> impl IntoView {
    let current = notice.0;
    view! {
        <Show when=move || current.with(Option::is_some)>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    if current.with(|n| n.as_ref().is_some_and(|(_, is_err)| *is_err)) {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || current.with(|n| n.as_ref().map(|(m, _)| m.clone()).unwrap_or_default())}</span>
                </div>
            </div>
        </Show>
    }
}

// =========================================================
// 表单控件
// =========================================================

/// 带标签的输入框
#[component]
pub fn Field(
    label: &'static str,
    value: impl Fn() -> String + Send + Sync + 'static,
    #[prop(into)] on_input: Callback<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let value = Signal::derive(value);
    let control = if multiline {
        view! {
            <textarea
                class="textarea textarea-bordered w-full"
                rows="4"
                required=required
                prop:value=value
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=kind
                class="input input-bordered w-full"
                required=required
                prop:value=value
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="form-control w-full">
            <span class="label-text mb-1">{label}</span>
            {control}
        </label>
    }
}

/// 加载中 / 错误 / 内容三态
#[component]
pub fn Loadable(
    loading: Signal<bool>,
    error: Signal<Option<String>>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div role="alert" class="alert alert-error text-sm my-2">
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
        <Show
            when=move || !loading.get()
            fallback=|| view! {
                <div class="flex justify-center py-12">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            {children()}
        </Show>
    }
}

/// 从 `ViewState` 信号派生出 `Loadable` 所需的两个信号
pub fn view_signals<T: Send + Sync + 'static>(
    state: RwSignal<ViewState<T>>,
) -> (Signal<bool>, Signal<Option<String>>) {
    (
        Signal::derive(move || state.with(|s| s.loading)),
        Signal::derive(move || state.with(|s| s.error.clone())),
    )
}
