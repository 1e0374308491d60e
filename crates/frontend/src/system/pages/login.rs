use contracts::system::auth::Viewer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_query_map;

use crate::routes::paths;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::notify::{Notifier, ToastNotifier};
use crate::system::auth::context::remember_session;
use crate::system::auth::{api, use_viewer};

const LOG_IN_FAILED: &str = "Sorry! We weren't able to log you in. Please try again later!";

/// Where to go once `viewer` is known; `None` keeps the sign-in card
fn landing_path(viewer: &Viewer) -> Option<String> {
    viewer
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
        .map(paths::user_path)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (viewer, set_viewer) = use_viewer();
    let notifier = ToastNotifier::from_context();
    let query = use_query_map();
    let (is_loading, set_is_loading) = signal(false);
    let code_sent = StoredValue::new(false);

    // Exchange the OAuth `code` the consent screen sent us back with
    Effect::new(move |_| {
        let Some(code) = query.read().get("code") else {
            return;
        };
        if code_sent.get_value() {
            return;
        }
        code_sent.set_value(true);
        set_is_loading.set(true);

        spawn_local(async move {
            match api::log_in(Some(code)).await {
                Ok(signed_in) => {
                    log::info!("signed in as {:?}", signed_in.id);
                    remember_session(&signed_in);
                    if landing_path(&signed_in).is_none() {
                        notifier.notify_error(LOG_IN_FAILED);
                    }
                    // a signed-in viewer re-renders into the redirect below
                    set_viewer.set(signed_in);
                }
                Err(e) => {
                    log::error!("log in failed: {}", e);
                    notifier.notify_error(LOG_IN_FAILED);
                }
            }
            _ = set_is_loading.try_set(false);
        });
    });

    let on_sign_in = move |_: leptos::ev::MouseEvent| {
        set_is_loading.set(true);
        spawn_local(async move {
            match api::auth_url().await {
                Ok(url) => {
                    let assigned = web_sys::window()
                        .map(|w| w.location().assign(&url).is_ok())
                        .unwrap_or(false);
                    if !assigned {
                        log::error!("could not open the consent screen");
                        notifier.notify_error(LOG_IN_FAILED);
                    }
                }
                Err(e) => {
                    log::error!("authUrl failed: {}", e);
                    notifier.notify_error(LOG_IN_FAILED);
                }
            }
            _ = set_is_loading.try_set(false);
        });
    };

    view! {
        <div class="log-in">
            {move || match viewer.with(landing_path) {
                Some(path) => view! { <Redirect path=path /> }.into_any(),
                None => view! {
                    <div class="log-in-card">
                        <PageHeader
                            title="Log in to TinyHouse!"
                            subtitle="Sign in with Google to start booking available rentals!"
                        />
                        <Button
                            class="log-in-card__google-button"
                            loading=Signal::derive(move || is_loading.get())
                            on_click=Callback::new(on_sign_in)
                        >
                            {move || if is_loading.get() { "Signing in..." } else { "Sign in with Google" }}
                        </Button>
                        <p class="log-in-card__note">
                            "Note: By signing in, you'll be redirected to the Google consent form "
                            "to sign in with your Google account."
                        </p>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
