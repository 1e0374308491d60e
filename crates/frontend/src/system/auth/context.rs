use contracts::system::auth::Viewer;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::notify::Notifier;

/// Viewer context provider component
#[component]
pub fn ViewerProvider(children: ChildrenFn) -> impl IntoView {
    let (viewer, set_viewer) = signal(Viewer::default());

    // Resume the session once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::log_in(None).await {
                Ok(restored) => {
                    log::debug!("session restored, signed in: {}", restored.is_signed_in());
                    remember_session(&restored);
                    set_viewer.set(restored);
                }
                Err(e) => {
                    log::warn!("session restore failed: {}", e);
                    storage::clear_token();
                    set_viewer.set(Viewer::anonymous());
                }
            }
        });
    });

    provide_context(viewer);
    provide_context(set_viewer);

    children()
}

/// Hook to access the viewer
pub fn use_viewer() -> (ReadSignal<Viewer>, WriteSignal<Viewer>) {
    let viewer =
        use_context::<ReadSignal<Viewer>>().expect("ViewerProvider not found in component tree");
    let set_viewer =
        use_context::<WriteSignal<Viewer>>().expect("ViewerProvider not found in component tree");

    (viewer, set_viewer)
}

/// Keep the session token in sync with what the backend returned
pub fn remember_session(viewer: &Viewer) {
    match viewer.token.as_deref() {
        Some(token) if !token.is_empty() => storage::save_token(token),
        _ => storage::clear_token(),
    }
}

/// Helper: Perform logout, returns whether the session ended
pub async fn do_log_out(set_viewer: WriteSignal<Viewer>, notifier: impl Notifier) -> bool {
    match api::log_out().await {
        Ok(viewer) => {
            storage::clear_token();
            set_viewer.set(Viewer {
                did_request: true,
                ..viewer
            });
            notifier.notify_success("You've successfully logged out!", None);
            true
        }
        Err(e) => {
            log::error!("log out failed: {}", e);
            notifier.notify_error("Sorry! We weren't able to log you out. Please try again later!");
            false
        }
    }
}
