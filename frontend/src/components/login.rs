use barrest_shell::error::ShellError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::use_shell;
use crate::web::redirect;

#[component]
pub fn LoginPage() -> impl IntoView {
    let shell = use_shell();
    let home_page = shell.context().config.navigation.home_page.clone();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember_me, set_remember_me) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 已有有效会话时直接进入外壳
    {
        let session = shell.context().session;
        let home_page = home_page.clone();
        if session.is_authenticated() {
            spawn_local(async move {
                if session.validate_session().await {
                    redirect(&home_page);
                }
            });
        }
    }

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if username.get().trim().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please enter username and password".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let session = shell.context().session;
        let home_page = home_page.clone();
        spawn_local(async move {
            let result = session
                .login(
                    username.get_untracked().trim(),
                    &password.get_untracked(),
                    remember_me.get_untracked(),
                )
                .await;
            match result {
                Ok(_) => redirect(&home_page),
                Err(ShellError::AuthenticationFailed(message)) => set_error_msg.set(Some(message)),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <i class="fas fa-glass-martini-alt text-3xl"></i>
                        </div>
                        <h1 class="text-3xl font-bold">"Bar Restaurant"</h1>
                        <p class="text-base-content/70">"Sign in to continue"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <i class="fas fa-exclamation-circle"></i>
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                autocomplete="username"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="current-password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <label class="label cursor-pointer justify-start gap-2">
                            <input
                                type="checkbox"
                                class="checkbox checkbox-sm"
                                on:change=move |ev| set_remember_me.set(event_target_checked(&ev))
                                prop:checked=remember_me
                            />
                            <span class="label-text">"Remember me"</span>
                        </label>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign in".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
