//! Transient success / error notifications.
//!
//! Views talk to the [`Notifier`] trait so the decision logic that fires a
//! notification can be checked without a browser.

use leptos::prelude::*;
use thaw::{Toast, ToastBody, ToastIntent, ToastOptions, ToastTitle, ToasterInjection};

pub trait Notifier {
    fn notify_error(&self, message: &str);
    fn notify_success(&self, message: &str, description: Option<&str>);
}

/// Shows thaw toasts. Requires a `ToasterProvider` up the tree.
///
/// The injection is kept in a local stored value so the notifier is `Copy`
/// and can be moved into reactive closures and mutation callbacks.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toaster: StoredValue<ToasterInjection, LocalStorage>,
}

impl ToastNotifier {
    pub fn from_context() -> Self {
        Self {
            toaster: StoredValue::new_local(ToasterInjection::expect_context()),
        }
    }

    fn dispatch(&self, intent: ToastIntent, toast: impl FnOnce() -> AnyView + Send + Sync + 'static) {
        let shown = self.toaster.try_with_value(|toaster| {
            toaster.dispatch_toast(toast, ToastOptions::default().with_intent(intent));
        });
        if shown.is_none() {
            log::warn!("toaster disposed, notification dropped");
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify_error(&self, message: &str) {
        log::warn!("notify error: {}", message);
        let title = message.to_string();
        self.dispatch(ToastIntent::Error, move || {
            view! {
                <Toast>
                    <ToastTitle>"Uh oh! Something went wrong :("</ToastTitle>
                    <ToastBody>{title}</ToastBody>
                </Toast>
            }
            .into_any()
        });
    }

    fn notify_success(&self, message: &str, description: Option<&str>) {
        log::info!("notify success: {}", message);
        let title = message.to_string();
        let body = description.map(str::to_string);
        self.dispatch(ToastIntent::Success, move || {
            view! {
                <Toast>
                    <ToastTitle>{title}</ToastTitle>
                    {body.map(|b| view! { <ToastBody>{b}</ToastBody> })}
                </Toast>
            }
            .into_any()
        });
    }
}
