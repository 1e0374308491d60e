use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes::paths;
use crate::shared::icons::icon;
use crate::shared::notify::ToastNotifier;
use crate::system::auth::context::{do_log_out, use_viewer};

#[component]
pub fn MenuItems() -> impl IntoView {
    let (viewer, set_viewer) = use_viewer();
    let notifier = ToastNotifier::from_context();
    let navigate = StoredValue::new_local(use_navigate());

    let on_log_out = move |_| {
        spawn_local(async move {
            if do_log_out(set_viewer, notifier).await {
                navigate.with_value(|nav| nav(paths::HOME, Default::default()));
            }
        });
    };

    let signed_in_id = move || viewer.with(|v| v.id.clone().filter(|id| !id.is_empty()));

    view! {
        <nav class="menu">
            <A href=paths::HOST attr:class="menu__item">
                {icon("house")}
                " Host"
            </A>
            {move || match signed_in_id() {
                Some(id) => {
                    let avatar = viewer.with(|v| v.avatar.clone());
                    view! {
                        <A href=paths::user_path(&id) attr:class="menu__item">
                            {match avatar {
                                Some(src) => view! { <img class="menu__avatar" src=src alt="Profile" /> }.into_any(),
                                None => icon("user"),
                            }}
                            " Profile"
                        </A>
                        <button class="button button--ghost menu__item" on:click=on_log_out>
                            {icon("logout")}
                            " Log out"
                        </button>
                    }
                    .into_any()
                }
                None => view! {
                    <A href=paths::LOGIN attr:class="menu__item">
                        <span class="button button--primary">"Sign In"</span>
                    </A>
                }
                .into_any(),
            }}
        </nav>
    }
}
