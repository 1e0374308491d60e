use crate::routes::routes::AppRoutes;
use crate::system::auth::ViewerProvider;
use leptos::prelude::*;
use thaw::{ConfigProvider, ToasterProvider};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <ToasterProvider>
                <ViewerProvider>
                    <AppRoutes />
                </ViewerProvider>
            </ToasterProvider>
        </ConfigProvider>
    }
}
