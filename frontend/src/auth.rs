//! 认证模块
//!
//! 持有唯一的 `ApiClient` 和会话状态信号。
//! 信号只是会话存储的镜像：登录、登出、401 之后调用 `sync` 刷新。
//! 路由服务通过注入的认证信号检查状态，与这里解耦。

use crate::web::{BrowserStorage, FetchHttpClient};
use babu_erectors::{ApiClient, ApiResult, ClientConfig, StorageTokenStore};
use leptos::prelude::*;
use std::rc::Rc;

pub type Client = ApiClient<FetchHttpClient>;

/// 认证上下文
///
/// 客户端不是 `Send`，放在本地 `StoredValue` 中；整个上下文是 `Copy` 的句柄。
#[derive(Clone, Copy)]
pub struct AuthContext {
    client: StoredValue<Rc<Client>, LocalStorage>,
    /// 是否持有凭据
    pub is_authenticated: RwSignal<bool>,
    /// 当前管理员用户名
    pub username: RwSignal<Option<String>>,
}

impl AuthContext {
    pub fn new() -> Self {
        let config = ClientConfig::from_value(option_env!("API_URL"));
        let session = Rc::new(StorageTokenStore::new(BrowserStorage));
        let client = ApiClient::new(config, FetchHttpClient, session);

        let ctx = Self {
            client: StoredValue::new_local(Rc::new(client)),
            is_authenticated: RwSignal::new(false),
            username: RwSignal::new(None),
        };
        ctx.sync();
        ctx
    }

    pub fn client(&self) -> Rc<Client> {
        self.client.get_value()
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        self.is_authenticated.into()
    }

    /// 从会话存储刷新信号
    pub fn sync(&self) {
        let client = self.client();
        let session = client.session();
        self.is_authenticated.set(session.is_authenticated());
        self.username
            .set(session.identity().map(|admin| admin.username));
    }

    /// 服务端拒绝凭据后的统一处理
    ///
    /// 会话已被客户端清空，这里只需刷新信号，路由守卫随之跳转登录页。
    pub fn watch_expiry(&self) {
        let ctx = *self;
        self.client().on_auth_expired(move || {
            web_sys::console::warn_1(&"[Auth] Session expired, returning to login.".into());
            ctx.sync();
        });
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 登录，成功后信号变化会触发路由守卫跳转到面板
pub async fn login(ctx: AuthContext, username: String, password: String) -> ApiResult<()> {
    let client = ctx.client();
    let result = client.auth().login(&username, &password).await.map(|_| ());
    ctx.sync();
    result
}

/// 注销并清除会话
///
/// 导航由路由服务的认证状态监听处理。
pub fn logout(ctx: AuthContext) {
    ctx.client().auth().logout();
    ctx.sync();
}
