use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use super::menu::MenuItems;
use super::search::{SearchAction, SearchState};
use crate::routes::paths;
use crate::shared::icons::icon;
use crate::shared::notify::ToastNotifier;

#[component]
pub fn AppHeader() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let notifier = ToastNotifier::from_context();
    let search = RwSignal::new(SearchState::default());

    Effect::new(move |_| {
        let pathname = location.pathname.get();
        search.maybe_update(|s| s.apply(SearchAction::PathChanged(pathname)));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(path) = search.with_untracked(|s| s.submit(&notifier)) {
            log::debug!("search navigates to {}", path);
            navigate(&path, Default::default());
        }
    };

    view! {
        <header class="app-header">
            <div class="app-header__logo-search-section">
                <div class="app-header__logo">
                    <A href=paths::HOME>
                        <img src="/assets/tinyhouse-logo.png" alt="App logo" />
                    </A>
                </div>
                <form class="app-header__search-input" role="search" on:submit=on_submit>
                    <input
                        type="text"
                        class="form__input"
                        placeholder="Search 'San Francisco'"
                        prop:value=move || search.with(|s| s.text.clone())
                        on:input=move |ev| {
                            search.maybe_update(|s| s.apply(SearchAction::Typed(event_target_value(&ev))));
                        }
                    />
                    <button type="submit" class="button button--primary" aria-label="Search">
                        {icon("search")}
                    </button>
                </form>
            </div>
            <div class="app-header__menu-section">
                <MenuItems />
            </div>
        </header>
    }
}
