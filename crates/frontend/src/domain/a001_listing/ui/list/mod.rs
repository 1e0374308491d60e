use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::routes::paths::decode_segment;
use crate::shared::components::page_header::PageHeader;

/// Location from the `:location` segment, if any
fn location_title(location: Option<String>) -> String {
    match location.filter(|l| !l.trim().is_empty()) {
        Some(l) => format!("Results for \"{}\"", l),
        None => "All listings".to_string(),
    }
}

/// Collection page, the target of header searches
#[component]
pub fn ListingsList() -> impl IntoView {
    let params = use_params_map();
    let location = move || params.read().get("location").map(|raw| decode_segment(&raw));

    view! {
        <div class="listings-content">
            <PageHeader title="Listings" subtitle=Signal::derive(move || location_title(location())) />
        </div>
    }
}
