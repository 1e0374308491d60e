use crate::domain::a001_listing::ui::details::ListingDetails;
use crate::domain::a001_listing::ui::host::HostListing;
use crate::domain::a001_listing::ui::list::ListingsList;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFound;
use crate::system::pages::user::UserPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/host") view=HostListing />
                    <Route path=path!("/listing/:id") view=ListingDetails />
                    <Route path=path!("/listings") view=ListingsList />
                    <Route path=path!("/listings/:location") view=ListingsList />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/user/:id") view=UserPage />
                </Routes>
            </Shell>
        </Router>
    }
}
