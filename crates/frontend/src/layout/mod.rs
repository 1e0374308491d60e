pub mod header;

use header::AppHeader;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  AppHeader (logo, search, menu)          |
/// +------------------------------------------+
/// |  routed page                             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <AppHeader />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
