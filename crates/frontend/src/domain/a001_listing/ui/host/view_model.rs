use contracts::domain::a001_listing::{HostListingData, HostListingInput};
use contracts::system::auth::Viewer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::model;
use super::state::{
    mark_valid, select_view, submit_attempt, HostField, HostForm, HostView, ImageUploadState,
    UploadEffect, UploadEvent,
};
use crate::shared::config::config;
use crate::shared::error::UiError;
use crate::shared::graphql::Mutation;
use crate::shared::image::{self, ImageMeta};
use crate::shared::notify::{Notifier, ToastNotifier};

/// ViewModel for the host listing form
#[derive(Clone)]
pub struct HostListingVm {
    pub form: RwSignal<HostForm>,
    pub upload: RwSignal<ImageUploadState>,
    /// Fields that failed the last submission attempt
    pub invalid: RwSignal<Vec<HostField>>,
    pub mutation: Mutation<HostListingInput, HostListingData>,
    notifier: ToastNotifier,
    /// Cleared when the owning view is disposed; read by `deliver`
    alive: Arc<AtomicBool>,
}

impl HostListingVm {
    pub fn new(notifier: ToastNotifier) -> Self {
        let mutation = Mutation::new(model::HOST_LISTING)
            .on_completed(move |_| {
                notifier.notify_success("You've successfully created your listing", None)
            })
            .on_error(move |e| {
                notifier.notify_error(&UiError::MutationFailed(e.to_string()).to_string())
            });

        let alive = Arc::new(AtomicBool::new(true));
        on_cleanup({
            let alive = alive.clone();
            move || alive.store(false, Ordering::Relaxed)
        });

        Self {
            form: RwSignal::new(HostForm::default()),
            upload: RwSignal::new(ImageUploadState::default()),
            invalid: RwSignal::new(Vec::new()),
            mutation,
            notifier,
            alive,
        }
    }

    /// Which of the four views to render
    pub fn view_state(&self, viewer: ReadSignal<Viewer>) -> Memo<HostView> {
        let status = self.mutation.status();
        Memo::new(move |_| select_view(&viewer.get(), &status.get()))
    }

    pub fn set_field(&self, field: HostField, value: String) {
        self.form.update(|f| f.set(field, value));
        self.invalid.maybe_update(|fields| mark_valid(fields, field));
    }

    /// Reactive validation message for `field`
    pub fn error_for(&self, field: HostField) -> Signal<Option<String>> {
        let invalid = self.invalid;
        Signal::derive(move || {
            invalid
                .with(|fields| fields.contains(&field))
                .then(|| field.message().to_string())
        })
    }

    /// A file was picked in the upload widget
    pub fn upload_command(&self, file: web_sys::File) {
        let limits = &config().upload;
        let meta = ImageMeta::from_file(&file);
        log::debug!("upload started: {} ({} bytes)", meta.name, meta.size);

        // rejected files never leave the browser
        let Some((ticket, effect)) = self.upload.try_update(|u| {
            u.dispatch(UploadEvent::Started, limits, &self.notifier);
            let effect = u.dispatch(UploadEvent::Finished(meta), limits, &self.notifier);
            (u.ticket, effect)
        }) else {
            return;
        };
        if effect != UploadEffect::Encode {
            return;
        }

        let this = self.clone();
        spawn_local(async move {
            if !limits.action_url.is_empty() {
                if let Err(e) = model::post_to_upload_endpoint(&limits.action_url, &file).await {
                    log::warn!("upload endpoint failed for {}: {}", file.name(), e);
                    this.deliver(ticket, UploadEvent::Failed);
                    return;
                }
            }

            let event = match image::encode_file(&file).await {
                Ok(value) => {
                    log::debug!("image encoded: {} bytes of text", value.len());
                    UploadEvent::Encoded(value)
                }
                Err(e) => {
                    log::error!("image encode failed: {}", e);
                    UploadEvent::Failed
                }
            };
            this.deliver(ticket, event);
        });
    }

    /// Hand a background result for pick `ticket` to the upload state
    fn deliver(&self, ticket: u64, event: UploadEvent) {
        let limits = &config().upload;
        let alive = self.alive.load(Ordering::Relaxed);
        let effect = self
            .upload
            .try_update(|u| u.deliver(ticket, alive, event, limits, &self.notifier));
        if effect == Some(UploadEffect::Stored) {
            self.invalid
                .maybe_update(|fields| mark_valid(fields, HostField::Image));
        }
    }

    /// Validate and send the form
    pub fn submit_command(&self) {
        if self.mutation.loading.get_untracked() {
            return;
        }

        let form = self.form.get_untracked();
        let image = self.upload.with_untracked(|u| u.encoded_value.clone());
        match submit_attempt(&form, image.as_deref(), &self.notifier) {
            Ok(input) => {
                self.invalid.set(Vec::new());
                log::info!("hosting listing '{}'", input.title);
                self.mutation.mutate(input);
            }
            Err(fields) => self.invalid.set(fields),
        }
    }
}
