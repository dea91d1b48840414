//! 浏览器宿主
//!
//! 把导航控制器的展示副作用映射到 Leptos 信号和 `window.location`。
//! 页面选择器就是 URL hash (`index.html#orders-active`)。

use barrest_shell::navigation::{MenuExpansionState, NavigationState, PageDescriptor, ShellHost};
use barrest_shell::session::UserSummary;
use futures::future::LocalBoxFuture;
use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen::prelude::*;

const TITLE_PREFIX: &str = "Bar Restaurant";

// =========================================================
// location 辅助函数
// =========================================================

fn location() -> Option<web_sys::Location> {
    web_sys::window().map(|w| w.location())
}

/// 当前 hash 中的页面 key
pub fn current_hash() -> Option<String> {
    let hash = location()?.hash().ok()?;
    let key = hash.trim_start_matches('#');
    (!key.is_empty()).then(|| key.to_string())
}

/// 整页跳转
pub fn redirect(href: &str) {
    match location() {
        Some(location) => {
            if let Err(e) = location.set_href(href) {
                warn!(href, error = ?e, "redirect failed");
            }
        }
        None => warn!(href, "no window location"),
    }
}

/// 监听浏览器前进/后退等引起的 hash 变化
pub fn on_hash_change(callback: impl Fn(String) + 'static) {
    let closure = Closure::<dyn Fn()>::new(move || {
        if let Some(key) = current_hash() {
            callback(key);
        }
    });

    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    }

    // 泄漏闭包以保持监听器存活
    closure.forget();
}

/// 重新创建容器内的 `<script>`，`innerHTML` 插入的脚本才会执行
pub fn run_inline_scripts(container: &web_sys::Element) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(scripts) = container.query_selector_all("script") else {
        return;
    };

    for index in 0..scripts.length() {
        let Some(old) = scripts
            .get(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let Ok(fresh) = document.create_element("script") else {
            continue;
        };

        for name in old.get_attribute_names().iter().filter_map(|n| n.as_string()) {
            if let Some(value) = old.get_attribute(&name) {
                let _ = fresh.set_attribute(&name, &value);
            }
        }
        fresh.set_text_content(old.text_content().as_deref());

        if let Err(e) = old.replace_with_with_node_1(&fresh) {
            warn!(error = ?e, "failed to run page script");
        }
    }
}

// =========================================================
// 界面状态
// =========================================================

/// 外壳界面读取的信号
#[derive(Clone, Copy)]
pub struct ShellSignals {
    pub navigation: RwSignal<NavigationState>,
    pub title: RwSignal<String>,
    pub active_key: RwSignal<Option<String>>,
    /// 当前页面所在的菜单分组，始终展开显示
    pub active_section: RwSignal<Option<String>>,
    pub user: RwSignal<Option<UserSummary>>,
    pub menu: RwSignal<MenuExpansionState>,
}

impl ShellSignals {
    pub fn new() -> Self {
        Self {
            navigation: RwSignal::new(NavigationState::default()),
            title: RwSignal::new(String::new()),
            active_key: RwSignal::new(None),
            active_section: RwSignal::new(None),
            user: RwSignal::new(None),
            menu: RwSignal::new(MenuExpansionState::default()),
        }
    }

    pub fn is_section_open(&self, section: &str) -> bool {
        self.menu.with(|m| m.is_expanded(section))
            || self.active_section.with(|s| s.as_deref() == Some(section))
    }
}

pub struct BrowserHost {
    signals: ShellSignals,
    login_page: String,
}

impl BrowserHost {
    pub fn new(signals: ShellSignals, login_page: &str) -> Self {
        Self {
            signals,
            login_page: login_page.to_string(),
        }
    }
}

impl ShellHost for BrowserHost {
    fn current_selector(&self) -> Option<String> {
        current_hash()
    }

    fn set_selector(&self, key: &str) {
        if current_hash().as_deref() == Some(key) {
            return;
        }
        if let Some(location) = location() {
            let _ = location.set_hash(key);
        }
    }

    fn set_title(&self, page: &PageDescriptor) {
        self.signals.title.set(page.title.clone());
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&format!("{} - {}", TITLE_PREFIX, page.title));
        }
    }

    fn set_active(&self, page: &PageDescriptor) {
        self.signals.active_key.set(Some(page.key.clone()));
        self.signals.active_section.set(page.section.clone());
    }

    fn show_user(&self, user: &UserSummary) {
        self.signals.user.set(Some(user.clone()));
    }

    fn apply_menu_expansion(&self, state: &MenuExpansionState) {
        self.signals.menu.set(state.clone());
    }

    fn render(&self, state: &NavigationState) {
        self.signals.navigation.set(state.clone());
    }

    fn confirm(&self, prompt: &str) -> LocalBoxFuture<'static, bool> {
        let answer = web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false);
        Box::pin(futures::future::ready(answer))
    }

    fn leave_to_login(&self) {
        redirect(&self.login_page);
    }
}
