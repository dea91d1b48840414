use barrest_shell::health::{HealthSnapshot, OverallStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::use_shell;

fn status_label(status: OverallStatus) -> &'static str {
    match status {
        OverallStatus::Unknown => "Checking...",
        OverallStatus::Healthy => "All systems online",
        OverallStatus::Degraded => "Some services down",
        OverallStatus::Offline => "Gateway offline",
    }
}

/// 顶栏的系统状态
#[component]
pub fn SystemStatus() -> impl IntoView {
    let shell = use_shell();
    let health = shell.context().health;

    let snapshot = RwSignal::new(health.snapshot());
    let listener = health.subscribe(move |latest: &HealthSnapshot| {
        let _ = snapshot.try_set(latest.clone());
    });
    let context = shell.context;
    on_cleanup(move || {
        context.try_with_value(|ctx| ctx.health.unsubscribe(listener));
    });

    let (refreshing, set_refreshing) = signal(false);
    let on_refresh = move |_| {
        if refreshing.get_untracked() {
            return;
        }
        set_refreshing.set(true);
        let health = shell.context().health;
        spawn_local(async move {
            health.check_now().await;
            set_refreshing.set(false);
        });
    };

    let services = move || {
        snapshot.with(|s| {
            s.dependencies
                .iter()
                .map(|(name, online)| (name.clone(), *online))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div id="systemStatusContainer" class="flex items-center gap-3">
            <span class=move || {
                format!("status-indicator status-{}", snapshot.with(|s| s.overall.as_str()))
            }></span>
            <span class="text-sm">{move || status_label(snapshot.with(|s| s.overall))}</span>
            <ul class="flex gap-2">
                <For
                    each=services
                    key=|service| service.clone()
                    children=move |(name, online)| {
                        view! {
                            <li class=if online { "badge badge-success" } else { "badge badge-error" }>
                                {name}
                            </li>
                        }
                    }
                />
            </ul>
            <button
                id="refreshStatusBtn"
                class="btn btn-ghost btn-circle btn-sm"
                on:click=on_refresh
                disabled=move || refreshing.get()
            >
                <i class=move || if refreshing.get() { "fas fa-sync-alt fa-spin" } else { "fas fa-sync-alt" }></i>
            </button>
        </div>
    }
}
