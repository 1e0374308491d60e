use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::paths;
use crate::shared::components::page_header::PageHeader;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <PageHeader
                title="Find a place you'll love to stay at"
                subtitle="Search for homes in the header, or list your own place."
            >
                <div class="home__cta">
                    <A href=paths::listings_path("San Francisco") attr:class="button button--primary">
                        "Popular listings in San Francisco"
                    </A>
                    <A href=paths::HOST attr:class="button button--secondary">
                        "Host your home"
                    </A>
                </div>
            </PageHeader>
        </div>
    }
}
