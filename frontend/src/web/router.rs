//! 路由服务模块 - 核心引擎
//!
//! 所有对 window.history 的操作都集中在此模块。
//! 导航流程："请求 -> 守卫 -> 写入历史 -> 更新路由信号"。
//! 守卫规则来自核心库的 `RouteGuard`，这里只负责浏览器一侧。

use babu_erectors::{AppRoute, AuthState, HistoryMode, Navigation, RouteGuard};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(path: &str, mode: HistoryMode) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = match mode {
        HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(path)),
        HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(path)),
    };
}

fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

fn auth_state(is_auth: bool) -> AuthState {
    if is_auth {
        AuthState::Authorized
    } else {
        AuthState::Unauthorized
    }
}

/// 路由器服务
///
/// 通过注入的认证信号与会话系统解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        // 首屏同样经过守卫，直接访问受保护地址会被替换为登录页
        let requested = AppRoute::from_path(&current_path());
        let nav = RouteGuard::resolve(
            auth_state(is_authenticated.get_untracked()),
            requested,
            HistoryMode::Replace,
        );
        if nav.redirected {
            write_history(&nav.route.to_path(), HistoryMode::Replace);
        }
        let (current_route, set_route) = signal(nav.route);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 导航到路由并指定历史写入方式
    pub fn go(&self, target: AppRoute, mode: HistoryMode) {
        let nav = RouteGuard::resolve(
            auth_state(self.is_authenticated.get_untracked()),
            target,
            mode,
        );
        self.apply(nav);
    }

    fn apply(&self, nav: Navigation) {
        if nav.redirected {
            log(&format!("[Router] Redirecting to {}", nav.route));
        }
        write_history(&nav.route.to_path(), nav.mode);
        self.set_route.set(nav.route);
    }

    /// 浏览器后退/前进
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            let nav = RouteGuard::resolve(
                auth_state(is_authenticated.get_untracked()),
                target,
                HistoryMode::Replace,
            );
            // 历史已经由浏览器切换，只有被守卫改写时才需要替换
            if nav.redirected {
                write_history(&nav.route.to_path(), HistoryMode::Replace);
            }
            set_route.set(nav.route);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 监听器与页面同寿命
        closure.forget();
    }

    /// 认证状态变化时重新执行守卫
    ///
    /// 登录后离开登录页；登出或会话过期后离开受保护页面。
    fn setup_auth_redirect(&self) {
        let router = *self;
        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.current_route.get_untracked();
            let nav = RouteGuard::resolve(auth_state(is_auth), route, HistoryMode::Replace);
            if nav.redirected {
                log(if is_auth {
                    "[Router] Auth state changed: logged in."
                } else {
                    "[Router] Auth state changed: logged out."
                });
                router.apply(nav);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);
    router.init_popstate_listener();
    router.setup_auth_redirect();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(is_authenticated: Signal<bool>, children: Children) -> impl IntoView {
    provide_router(is_authenticated);
    children()
}

/// 路由出口组件，根据当前路由渲染对应视图
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();
    move || matcher(router.current_route().get())
}

/// 站内链接，点击时走路由服务而不是整页跳转
#[component]
pub fn Link(
    route: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = route.to_path();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.go(route.clone(), HistoryMode::Push);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
