use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::routes::paths::decode_segment;
use crate::shared::components::page_header::PageHeader;

/// Landing page for a single listing, reached after hosting one
#[component]
pub fn ListingDetails() -> impl IntoView {
    let params = use_params_map();
    let id = move || {
        params
            .read()
            .get("id")
            .map(|raw| decode_segment(&raw))
            .unwrap_or_default()
    };

    view! {
        <div class="listing-content">
            <PageHeader title="Listing" subtitle=Signal::derive(move || format!("Listing #{}", id())) />
        </div>
    }
}
