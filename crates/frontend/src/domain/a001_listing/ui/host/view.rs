use contracts::domain::a001_listing::{ListingType, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use leptos::prelude::*;
use leptos_router::components::{Redirect, A};
use thaw::{Spinner, SpinnerSize};
use wasm_bindgen::JsCast;

use super::state::{HostField, HostView};
use super::view_model::HostListingVm;
use crate::routes::paths;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, FieldFooter, Input, RadioGroup, RadioOption, Textarea};
use crate::shared::icons::icon;
use crate::shared::notify::ToastNotifier;
use crate::system::auth::use_viewer;

#[component]
pub fn HostListing() -> impl IntoView {
    let (viewer, _) = use_viewer();
    let vm = HostListingVm::new(ToastNotifier::from_context());
    let current = vm.view_state(viewer);

    view! {
        <div class="host-content">
            {move || match current.get() {
                HostView::SignInRequired => view! { <SignInNotice /> }.into_any(),
                HostView::Waiting => view! {
                    <PageHeader title="Please wait!" subtitle="We're creating your listing now." />
                }
                .into_any(),
                HostView::Redirect(id) => view! { <Redirect path=paths::listing_path(&id) /> }.into_any(),
                HostView::Form => view! { <HostListingForm vm=vm.clone() /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn SignInNotice() -> impl IntoView {
    view! {
        <PageHeader
            title="You'll have to be signed in and connected with Stripe to host a listing!"
        >
            <p class="page-header__subtitle">
                "We only allow users who've signed in to our application and have connected with "
                "Stripe to host new listings. You can sign in at the "
                <A href=paths::LOGIN>"/login"</A>
                " page and connect with Stripe shortly after."
            </p>
        </PageHeader>
    }
}

#[component]
fn HostListingForm(vm: HostListingVm) -> impl IntoView {
    let form = vm.form;

    let text = move |field: HostField| Signal::derive(move || form.with(|f| f.text(field).to_string()));
    let setter = |field: HostField| {
        let vm = vm.clone();
        Callback::new(move |value: String| vm.set_field(field, value))
    };

    let type_options = ListingType::ALL
        .iter()
        .map(|t| RadioOption {
            value: t.as_str().to_string(),
            label: t.label().to_string(),
            icon: Some(match t {
                ListingType::Apartment => "apartment",
                ListingType::House => "house",
            }),
        })
        .collect::<Vec<_>>();

    let submitting = vm.mutation.loading;
    let on_submit = {
        let vm = vm.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.submit_command();
        }
    };

    view! {
        <form class="host__form" on:submit=on_submit novalidate>
            <PageHeader
                title="Hi! Let's get started listing your place."
                subtitle="In this form, we'll collect some basic and additional information about your listing."
            />

            <RadioGroup
                label="Home Type"
                name="host-type"
                value=text(HostField::ListingType)
                on_change=setter(HostField::ListingType)
                options=type_options
                error=vm.error_for(HostField::ListingType)
            />

            <Input
                label="Max # of Guests"
                id="host-num-of-guests"
                input_type="number"
                min="1"
                placeholder="4"
                value=text(HostField::NumOfGuests)
                on_input=setter(HostField::NumOfGuests)
                error=vm.error_for(HostField::NumOfGuests)
            />

            <Input
                label="Title"
                id="host-title"
                placeholder="The iconic and luxurious Bel-Air mansion"
                max_length=TITLE_MAX_CHARS
                hint=format!("Max character count of {}", TITLE_MAX_CHARS)
                value=text(HostField::Title)
                on_input=setter(HostField::Title)
                error=vm.error_for(HostField::Title)
            />

            <Textarea
                label="Description of listing"
                id="host-description"
                rows=3
                placeholder="Modern, clean and iconic home of the Fresh Prince. Situated in the heart of Bel-Air Los Angeles."
                max_length=DESCRIPTION_MAX_CHARS
                hint=format!("Max character count of {}", DESCRIPTION_MAX_CHARS)
                value=text(HostField::Description)
                on_input=setter(HostField::Description)
                error=vm.error_for(HostField::Description)
            />

            <Input
                label="Address"
                id="host-address"
                placeholder="251 North Bristol Avenue"
                value=text(HostField::Address)
                on_input=setter(HostField::Address)
                error=vm.error_for(HostField::Address)
            />

            <Input
                label="City/Town"
                id="host-city"
                placeholder="Los Angeles"
                value=text(HostField::City)
                on_input=setter(HostField::City)
                error=vm.error_for(HostField::City)
            />

            <Input
                label="State/Province"
                id="host-state"
                placeholder="California"
                value=text(HostField::State)
                on_input=setter(HostField::State)
                error=vm.error_for(HostField::State)
            />

            <Input
                label="Zip/Postal Code"
                id="host-postal-code"
                placeholder="Please enter a zip code for your listing."
                value=text(HostField::PostalCode)
                on_input=setter(HostField::PostalCode)
                error=vm.error_for(HostField::PostalCode)
            />

            <ImageUpload vm=vm.clone() />

            <Input
                label="Price"
                id="host-price"
                input_type="number"
                min="0"
                placeholder="120"
                hint="All prices in $USD/day"
                value=text(HostField::Price)
                on_input=setter(HostField::Price)
                error=vm.error_for(HostField::Price)
            />

            <Button button_type="submit" loading=Signal::derive(move || submitting.get())>"Submit"</Button>
        </form>
    }
}

/// Picture-card upload: spinner while busy, preview once encoded
#[component]
fn ImageUpload(vm: HostListingVm) -> impl IntoView {
    let upload = vm.upload;
    let error = vm.error_for(HostField::Image);

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                vm.upload_command(file);
            }
            // allow picking the same file again after a rejection
            input.set_value("");
        }
    };

    view! {
        <div class="form__group">
            <label class="form__label" for="host-image">"Image"</label>
            <label class="host__form-image-upload" for="host-image">
                {move || {
                    let state = upload.get();
                    if state.in_progress {
                        view! { <Spinner size=SpinnerSize::Small /> }.into_any()
                    } else if let Some(src) = state.encoded_value {
                        view! { <img src=src alt="listing" /> }.into_any()
                    } else {
                        view! {
                            <div>
                                {icon("plus")}
                                <div class="host__form-image-upload-text">"Upload"</div>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </label>
            <input
                id="host-image"
                type="file"
                accept="image/jpeg,image/png"
                class="hidden"
                on:change=handle_file_select
            />
            <FieldFooter
                hint="Images have to be under 1MB of size and of type JPG or PNG"
                error=error
            />
        </div>
    }
}
