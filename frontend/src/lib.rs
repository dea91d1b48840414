//! Barrest 管理后台前端
//!
//! - `web`: 浏览器实现 (HTTP、存储、调度、宿主、配置)
//! - `pages`: 页面目录
//! - `components`: UI 组件层
//!
//! 登录页和外壳是两个独立入口 (`login.html`、`index.html`)，
//! 之间的跳转都是整页加载。

mod components {
    pub mod login;
    pub mod shell;
    mod status;
}
mod pages;

pub(crate) mod web {
    mod config;
    mod host;
    mod http;
    mod runtime;
    mod storage;

    pub use config::load_config;
    pub use host::{BrowserHost, ShellSignals, on_hash_change, redirect, run_inline_scripts};
    pub use http::BrowserHttpClient;
    pub use runtime::BrowserRuntime;
    pub use storage::BrowserStorage;
}

use std::rc::Rc;

use barrest_shell::context::{AppContext, HostServices};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::login::LoginPage;
use crate::components::shell::ShellPage;
use crate::web::{BrowserHost, BrowserHttpClient, BrowserRuntime, BrowserStorage, ShellSignals};

pub(crate) type ShellContext = AppContext<BrowserHttpClient, BrowserRuntime>;

/// 通过 Leptos Context 共享
///
/// `AppContext` 不是 `Send`，放在本地存储的 `StoredValue` 中。
#[derive(Clone, Copy)]
pub(crate) struct Shell {
    pub context: StoredValue<ShellContext, LocalStorage>,
    pub signals: ShellSignals,
}

impl Shell {
    fn new() -> Self {
        let signals = ShellSignals::new();
        let config = web::load_config();
        let host = Rc::new(BrowserHost::new(signals, &config.navigation.login_page));

        let context = AppContext::new(
            config,
            HostServices {
                client: BrowserHttpClient,
                runtime: BrowserRuntime,
                host,
                ephemeral: Rc::new(BrowserStorage::Session),
                persistent: Rc::new(BrowserStorage::Local),
            },
            pages::page_registry(),
        );

        Self {
            context: StoredValue::new_local(context),
            signals,
        }
    }

    pub fn context(&self) -> ShellContext {
        self.context.get_value()
    }
}

/// 从 Context 获取外壳
pub(crate) fn use_shell() -> Shell {
    use_context::<Shell>().expect("Shell should be provided")
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(Shell::new());

    view! {
        <Router>
            <Routes fallback=|| view! {
                <div class="flex items-center justify-center min-h-screen bg-base-200">
                    <div class="text-center">
                        <h1 class="text-6xl font-bold text-error">"404"</h1>
                        <p class="text-xl mt-4">"Page not found"</p>
                    </div>
                </div>
            }>
                <Route path=path!("/") view=ShellPage />
                <Route path=path!("/index.html") view=ShellPage />
                <Route path=path!("/login.html") view=LoginPage />
            </Routes>
        </Router>
    }
}
