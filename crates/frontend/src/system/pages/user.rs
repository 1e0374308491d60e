use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::routes::paths::decode_segment;
use crate::shared::components::page_header::PageHeader;
use crate::system::auth::use_viewer;

/// Profile placeholder; shows the avatar when it is the viewer's own page
#[component]
pub fn UserPage() -> impl IntoView {
    let (viewer, _) = use_viewer();
    let params = use_params_map();
    let user_id = move || {
        params
            .read()
            .get("id")
            .map(|raw| decode_segment(&raw))
            .unwrap_or_default()
    };
    let own_avatar = move || {
        let id = user_id();
        viewer.with(|v| {
            (v.id.as_deref() == Some(id.as_str()))
                .then(|| v.avatar.clone())
                .flatten()
        })
    };

    view! {
        <div class="user">
            <PageHeader title="Profile" subtitle=Signal::derive(move || format!("User #{}", user_id())) />
            {move || own_avatar().map(|src| view! {
                <img class="user__avatar" src=src alt="User avatar" />
            })}
        </div>
    }
}
