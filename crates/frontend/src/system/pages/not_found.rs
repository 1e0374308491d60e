use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::paths;
use crate::shared::components::page_header::PageHeader;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <PageHeader
                title="Uh oh! Something went wrong :("
                subtitle="The page you're looking for can't be found"
            >
                <A href=paths::HOME attr:class="button button--primary">
                    "Go to Home"
                </A>
            </PageHeader>
        </div>
    }
}
