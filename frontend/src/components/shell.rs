//! 外壳页面：侧边菜单、顶栏和动态内容区

use barrest_shell::navigation::{ControllerState, PageDescriptor, PagePhase};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::MouseEvent;

use crate::components::status::SystemStatus;
use crate::pages::{MenuSection, SECTIONS};
use crate::use_shell;
use crate::web::{on_hash_change, run_inline_scripts};

#[component]
pub fn ShellPage() -> impl IntoView {
    let shell = use_shell();
    let signals = shell.signals;

    // 认证通过后才开始跟随 hash 变化
    let navigation = shell.context().navigation;
    spawn_local(async move {
        if navigation.initialize().await == ControllerState::Ready {
            let follower = navigation.clone();
            on_hash_change(move |key| {
                let navigation = follower.clone();
                spawn_local(async move {
                    navigation.follow_selector(&key).await;
                });
            });
        }
    });

    let registry = shell.context().navigation.registry().clone();
    let top_level: Vec<PageDescriptor> = registry
        .pages()
        .iter()
        .filter(|page| page.section.is_none())
        .cloned()
        .collect();
    let groups: Vec<(&'static MenuSection, Vec<PageDescriptor>)> = SECTIONS
        .iter()
        .map(|section| (section, registry.pages_in(section.id).cloned().collect::<Vec<_>>()))
        .filter(|(_, pages)| !pages.is_empty())
        .collect();

    let on_logout = move |_| {
        let navigation = shell.context().navigation;
        spawn_local(async move {
            navigation.logout().await;
        });
    };

    view! {
        <Show when=move || signals.user.with(Option::is_none)>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-base-200">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        </Show>

        <div class="flex min-h-screen bg-base-200">
            <aside class="w-64 bg-base-100 shadow-xl">
                <div class="p-4 text-xl font-bold">
                    <i class="fas fa-glass-martini-alt mr-2"></i>
                    "Bar Restaurant"
                </div>
                <ul class="menu w-full">
                    {top_level.into_iter().map(|page| view! { <MenuLink page=page /> }).collect_view()}
                    {groups
                        .into_iter()
                        .map(|(section, pages)| view! { <MenuGroup section=section pages=pages /> })
                        .collect_view()}
                </ul>
            </aside>

            <main class="flex-1 flex flex-col">
                <header class="navbar bg-base-100 shadow px-6 gap-4">
                    <h1 id="pageTitle" class="flex-1 text-2xl font-semibold">
                        {move || signals.title.get()}
                    </h1>
                    <SystemStatus />
                    {move || {
                        signals.user.get().map(|user| {
                            view! {
                                <div class="flex items-center gap-2">
                                    <div class="avatar placeholder">
                                        <div class="bg-neutral text-neutral-content rounded-full w-8">
                                            <span>{user.initial}</span>
                                        </div>
                                    </div>
                                    <div class="flex flex-col leading-tight">
                                        <span id="userName" class="font-semibold">{user.display_name}</span>
                                        <span id="userRole" class="text-xs opacity-70">{user.role_name}</span>
                                    </div>
                                </div>
                            }
                        })
                    }}
                    <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                        <i class="fas fa-sign-out-alt"></i>
                        "Logout"
                    </button>
                </header>

                <section id="contentArea" class="flex-1 p-6">
                    <PageContent />
                </section>
            </main>
        </div>
    }
}

#[component]
fn MenuLink(page: PageDescriptor) -> impl IntoView {
    let shell = use_shell();
    let key = page.key.clone();

    let is_active = {
        let key = key.clone();
        move || shell.signals.active_key.with(|active| active.as_deref() == Some(key.as_str()))
    };

    let on_click = {
        let key = key.clone();
        move |ev: MouseEvent| {
            ev.prevent_default();
            let navigation = shell.context().navigation;
            let key = key.clone();
            spawn_local(async move {
                navigation.navigate_to(&key).await;
            });
        }
    };

    view! {
        <li>
            <a href=format!("#{}", key) class:active=is_active on:click=on_click>
                <i class=format!("fas {}", page.icon)></i>
                <span>{page.title}</span>
            </a>
        </li>
    }
}

#[component]
fn MenuGroup(section: &'static MenuSection, pages: Vec<PageDescriptor>) -> impl IntoView {
    let shell = use_shell();
    let id = section.id;
    let open = move || shell.signals.is_section_open(id);

    let on_toggle = move |ev: MouseEvent| {
        ev.prevent_default();
        shell.context().navigation.toggle_section(id);
    };

    view! {
        <li>
            <a href="#" class="submenu-toggle" data-target=id on:click=on_toggle>
                <i class=format!("fas {}", section.icon)></i>
                <span>{section.title}</span>
                <i class=move || {
                    if open() { "fas fa-chevron-down ml-auto" } else { "fas fa-chevron-right ml-auto" }
                }></i>
            </a>
            <ul id=id class="submenu" class:hidden=move || !open()>
                {pages.into_iter().map(|page| view! { <MenuLink page=page /> }).collect_view()}
            </ul>
        </li>
    }
}

/// 按加载阶段渲染内容区
#[component]
fn PageContent() -> impl IntoView {
    let shell = use_shell();
    let navigation = shell.signals.navigation;
    let content_ref = NodeRef::<leptos::html::Div>::new();

    // 每次挂载新内容后执行其中的脚本
    Effect::new(move |_| {
        if let Some(container) = content_ref.get() {
            run_inline_scripts(&container);
        }
    });

    let go_home = move |_| {
        let navigation = shell.context().navigation;
        spawn_local(async move {
            navigation.navigate_home().await;
        });
    };

    move || {
        let state = navigation.get();
        match state.phase {
            PagePhase::Idle => ().into_any(),
            PagePhase::Loading => view! {
                <div class="flex justify-center py-16">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
            .into_any(),
            PagePhase::Loaded => view! {
                <div
                    class="page-content"
                    node_ref=content_ref
                    inner_html=state.content.unwrap_or_default()
                ></div>
            }
            .into_any(),
            PagePhase::LoadError(failure) => view! {
                <div role="alert" class="alert alert-error">
                    <i class="fas fa-exclamation-triangle"></i>
                    <div>
                        <h3 class="font-bold">"Failed to load page"</h3>
                        <p class="text-sm">{failure.message}</p>
                    </div>
                    <button class="btn btn-sm" on:click=go_home>"Back to dashboard"</button>
                </div>
            }
            .into_any(),
        }
    }
}
