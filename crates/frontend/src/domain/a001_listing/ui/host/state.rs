//! Host listing form state.
//!
//! Everything here is plain data so the form's decisions (which view to
//! show, whether a file is accepted, what request gets sent) can be tested
//! without a browser.

use contracts::domain::a001_listing::{
    HostListingData, HostListingInput, ListingType, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS,
};
use contracts::shared::metadata::ValidationRules;
use contracts::system::auth::Viewer;

use crate::shared::config::UploadConfig;
use crate::shared::error::UiError;
use crate::shared::graphql::MutationStatus;
use crate::shared::image::{check_image, ImageMeta};
use crate::shared::notify::Notifier;

// ============================================================================
// Fields
// ============================================================================

/// Largest price whose cents still fit the backend's 32-bit `Int`
const MAX_PRICE: f64 = i32::MAX as f64 / 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostField {
    ListingType,
    NumOfGuests,
    Title,
    Description,
    Address,
    City,
    State,
    PostalCode,
    Image,
    Price,
}

impl HostField {
    /// Form order
    pub const ALL: [HostField; 10] = [
        HostField::ListingType,
        HostField::NumOfGuests,
        HostField::Title,
        HostField::Description,
        HostField::Address,
        HostField::City,
        HostField::State,
        HostField::PostalCode,
        HostField::Image,
        HostField::Price,
    ];

    pub fn rules(&self) -> ValidationRules {
        match self {
            HostField::ListingType => ValidationRules::required("Please select a home type!"),
            HostField::NumOfGuests => {
                ValidationRules::required("Please enter a max number of guests!")
                    .integer()
                    .with_min(1.0)
                    .with_max(i32::MAX as f64)
            }
            HostField::Title => ValidationRules::required("Please enter a title for your listing!")
                .with_max_length(TITLE_MAX_CHARS),
            HostField::Description => {
                ValidationRules::required("Please enter a description for your listing!")
                    .with_max_length(DESCRIPTION_MAX_CHARS)
            }
            HostField::Address => ValidationRules::required("Please enter an address for your listing!"),
            HostField::City => {
                ValidationRules::required("Please enter a city (or region) for your listing!")
            }
            HostField::State => {
                ValidationRules::required("Please enter a state (or province) for your listing!")
            }
            HostField::PostalCode => {
                ValidationRules::required("Please enter a zip (or postal) code for your listing!")
            }
            HostField::Image => ValidationRules::required("Please provide an image for your listing!"),
            HostField::Price => {
                ValidationRules::required("Please enter a price for your listing!")
                    .with_min(0.0)
                    .with_max(MAX_PRICE)
            }
        }
    }

    pub fn message(&self) -> &'static str {
        self.rules().message
    }
}

/// Raw values as typed; numbers stay strings until submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostForm {
    pub listing_type: Option<ListingType>,
    pub num_of_guests: String,
    pub title: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub price: String,
}

impl HostForm {
    /// Text bound to an input. The image is not part of the typed form.
    pub fn text(&self, field: HostField) -> &str {
        match field {
            HostField::ListingType => self.listing_type.map(|t| t.as_str()).unwrap_or_default(),
            HostField::NumOfGuests => &self.num_of_guests,
            HostField::Title => &self.title,
            HostField::Description => &self.description,
            HostField::Address => &self.address,
            HostField::City => &self.city,
            HostField::State => &self.state,
            HostField::PostalCode => &self.postal_code,
            HostField::Price => &self.price,
            HostField::Image => "",
        }
    }

    pub fn set(&mut self, field: HostField, value: String) {
        match field {
            HostField::ListingType => self.listing_type = ListingType::parse(&value),
            HostField::NumOfGuests => self.num_of_guests = value,
            HostField::Title => self.title = value,
            HostField::Description => self.description = value,
            HostField::Address => self.address = value,
            HostField::City => self.city = value,
            HostField::State => self.state = value,
            HostField::PostalCode => self.postal_code = value,
            HostField::Price => self.price = value,
            HostField::Image => {}
        }
    }

    /// Street, city, state and postal code as one line
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.address, self.city, self.state, self.postal_code
        )
    }
}

/// Dollars as typed to cents as sent; `None` when out of `i32` range
pub fn price_to_cents(price: f64) -> Option<i32> {
    let cents = (price * 100.0).round();
    (cents.is_finite() && cents >= i32::MIN as f64 && cents <= i32::MAX as f64)
        .then_some(cents as i32)
}

/// Validate every field and assemble the request.
///
/// On failure returns the invalid fields in form order; no request exists.
pub fn build_request(
    form: &HostForm,
    image: Option<&str>,
) -> Result<HostListingInput, Vec<HostField>> {
    let mut invalid = Vec::new();

    let listing_type = form.listing_type;
    if listing_type.is_none() {
        invalid.push(HostField::ListingType);
    }

    let guests = HostField::NumOfGuests
        .rules()
        .validate_number(&form.num_of_guests)
        .ok()
        .flatten();
    if guests.is_none() {
        invalid.push(HostField::NumOfGuests);
    }

    for field in [
        HostField::Title,
        HostField::Description,
        HostField::Address,
        HostField::City,
        HostField::State,
        HostField::PostalCode,
    ] {
        if field.rules().validate_string(form.text(field)).is_err() {
            invalid.push(field);
        }
    }

    let image = image.filter(|value| !value.is_empty());
    if image.is_none() {
        invalid.push(HostField::Image);
    }

    let price = HostField::Price
        .rules()
        .validate_number(&form.price)
        .ok()
        .flatten()
        .and_then(price_to_cents);
    if price.is_none() {
        invalid.push(HostField::Price);
    }

    match (listing_type, guests, image, price) {
        (Some(listing_type), Some(guests), Some(image), Some(price)) if invalid.is_empty() => {
            Ok(HostListingInput {
                title: form.title.clone(),
                description: form.description.clone(),
                image: image.to_string(),
                listing_type,
                address: form.full_address(),
                price,
                num_of_guests: guests as i32,
            })
        }
        _ => Err(invalid),
    }
}

/// `build_request` that reports a blocked submission with one notification
pub fn submit_attempt(
    form: &HostForm,
    image: Option<&str>,
    notifier: &impl Notifier,
) -> Result<HostListingInput, Vec<HostField>> {
    build_request(form, image).inspect_err(|fields| {
        log::debug!("host form blocked, invalid fields: {:?}", fields);
        notifier.notify_error(&UiError::IncompleteForm.to_string());
    })
}

/// Drop `field` from the failed set; true if it was there
pub fn mark_valid(invalid: &mut Vec<HostField>, field: HostField) -> bool {
    let before = invalid.len();
    invalid.retain(|f| *f != field);
    invalid.len() != before
}

// ============================================================================
// Image upload
// ============================================================================

/// `in_progress` shows the spinner in place of the preview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageUploadState {
    pub in_progress: bool,
    pub encoded_value: Option<String>,
    /// Bumped on every pick; results tagged with an older value are stale
    pub ticket: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEvent {
    Started,
    Finished(ImageMeta),
    Encoded(String),
    Failed,
}

/// Work the caller must start after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadEffect {
    None,
    /// File accepted: send it to the upload endpoint, then encode
    Encode,
    /// A new image was stored
    Stored,
}

impl ImageUploadState {
    /// A rejected file never clears a previously accepted image.
    pub fn apply(
        &mut self,
        event: UploadEvent,
        limits: &UploadConfig,
    ) -> Result<UploadEffect, UiError> {
        match event {
            UploadEvent::Started => {
                self.in_progress = true;
                self.ticket += 1;
                Ok(UploadEffect::None)
            }
            UploadEvent::Finished(meta) => match check_image(&meta, limits) {
                Ok(()) => {
                    self.in_progress = true;
                    Ok(UploadEffect::Encode)
                }
                Err(e) => {
                    self.in_progress = false;
                    Err(e)
                }
            },
            UploadEvent::Encoded(value) => {
                self.encoded_value = Some(value);
                self.in_progress = false;
                Ok(UploadEffect::Stored)
            }
            UploadEvent::Failed => {
                self.in_progress = false;
                Ok(UploadEffect::None)
            }
        }
    }

    /// `apply`, surfacing a rejection through `notifier`
    pub fn dispatch(
        &mut self,
        event: UploadEvent,
        limits: &UploadConfig,
        notifier: &impl Notifier,
    ) -> UploadEffect {
        match self.apply(event, limits) {
            Ok(effect) => effect,
            Err(e) => {
                log::warn!("image rejected: {}", e);
                notifier.notify_error(&e.to_string());
                UploadEffect::None
            }
        }
    }

    /// Apply the outcome of background work started for pick `ticket`.
    ///
    /// Ignored once the form is gone (`alive == false`) or a newer pick
    /// has started.
    pub fn deliver(
        &mut self,
        ticket: u64,
        alive: bool,
        event: UploadEvent,
        limits: &UploadConfig,
        notifier: &impl Notifier,
    ) -> UploadEffect {
        if !alive {
            log::warn!("upload result arrived after the host form closed, dropped");
            return UploadEffect::None;
        }
        if ticket != self.ticket {
            log::debug!("stale upload result {} (current {}), dropped", ticket, self.ticket);
            return UploadEffect::None;
        }
        self.dispatch(event, limits, notifier)
    }
}

// ============================================================================
// View selection
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostView {
    SignInRequired,
    Waiting,
    /// Listing created, go to its page
    Redirect(String),
    Form,
}

/// First match wins: identity, in-flight, created, form.
pub fn select_view(viewer: &Viewer, status: &MutationStatus<HostListingData>) -> HostView {
    if !viewer.is_signed_in() {
        return HostView::SignInRequired;
    }
    match status {
        MutationStatus::InFlight => HostView::Waiting,
        MutationStatus::Succeeded(data) => HostView::Redirect(data.host_listing.id.clone()),
        MutationStatus::Idle | MutationStatus::Failed(_) => HostView::Form,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;
    use crate::shared::notify::testing::RecordingNotifier;
    use contracts::domain::a001_listing::HostListingResult;

    const IMAGE: &str = "data:image/jpeg;base64,/9j/";

    fn valid_form() -> HostForm {
        HostForm {
            listing_type: Some(ListingType::House),
            num_of_guests: "4".into(),
            title: "The iconic and luxurious Bel-Air mansion".into(),
            description: "Modern, clean and iconic home of the Fresh Prince.".into(),
            address: "251 North Bristol Avenue".into(),
            city: "Los Angeles".into(),
            state: "California".into(),
            postal_code: "90210".into(),
            price: "120".into(),
        }
    }

    fn signed_in() -> Viewer {
        Viewer {
            id: Some("u1".into()),
            did_request: true,
            ..Viewer::default()
        }
    }

    fn meta(mime: &str, size: u64) -> ImageMeta {
        ImageMeta {
            name: "photo".into(),
            mime: mime.into(),
            size,
        }
    }

    #[test]
    fn test_request_scales_price_and_joins_address() {
        let input = build_request(&valid_form(), Some(IMAGE)).unwrap();
        assert_eq!(input.price, 12000);
        assert_eq!(
            input.address,
            "251 North Bristol Avenue, Los Angeles, California, 90210"
        );
        assert_eq!(input.num_of_guests, 4);
        assert_eq!(input.listing_type, ListingType::House);
        assert_eq!(input.image, IMAGE);
    }

    #[test]
    fn test_decimal_price_rounds_to_cents() {
        let mut form = valid_form();
        form.price = "19.99".into();
        assert_eq!(build_request(&form, Some(IMAGE)).unwrap().price, 1999);
        form.price = "0".into();
        assert_eq!(build_request(&form, Some(IMAGE)).unwrap().price, 0);
    }

    #[test]
    fn test_each_missing_field_blocks_with_one_notice() {
        for field in HostField::ALL {
            let mut form = valid_form();
            let mut image = Some(IMAGE);
            match field {
                HostField::ListingType => form.listing_type = None,
                HostField::Image => image = None,
                other => form.set(other, String::new()),
            }

            let notifier = RecordingNotifier::default();
            let result = submit_attempt(&form, image, &notifier);
            assert_eq!(result, Err(vec![field]), "field {:?}", field);
            assert_eq!(
                notifier.errors(),
                vec!["Please complete all required form fields.".to_string()]
            );
        }
    }

    #[test]
    fn test_price_must_fit_backend_int() {
        let mut form = valid_form();
        for price in ["1e300", "30000000", "21474836.48"] {
            form.price = price.into();
            assert_eq!(
                build_request(&form, Some(IMAGE)),
                Err(vec![HostField::Price]),
                "price {}",
                price
            );
        }
        form.price = "21474836.47".into();
        assert_eq!(build_request(&form, Some(IMAGE)).unwrap().price, i32::MAX);
    }

    #[test]
    fn test_price_to_cents_is_checked() {
        assert_eq!(price_to_cents(120.0), Some(12000));
        assert_eq!(price_to_cents(19.99), Some(1999));
        assert_eq!(price_to_cents(f64::MAX), None);
        assert_eq!(price_to_cents(f64::NAN), None);
    }

    #[test]
    fn test_mark_valid() {
        let mut invalid = vec![HostField::Title, HostField::Image];
        assert!(mark_valid(&mut invalid, HostField::Image));
        assert_eq!(invalid, vec![HostField::Title]);
        assert!(!mark_valid(&mut invalid, HostField::Image));
    }

    #[test]
    fn test_whitespace_only_text_is_missing() {
        let mut form = valid_form();
        form.city = "   ".into();
        assert_eq!(build_request(&form, Some(IMAGE)), Err(vec![HostField::City]));
    }

    #[test]
    fn test_length_limits() {
        let mut form = valid_form();
        form.title = "x".repeat(TITLE_MAX_CHARS);
        form.description = "y".repeat(DESCRIPTION_MAX_CHARS);
        assert!(build_request(&form, Some(IMAGE)).is_ok());

        form.title.push('x');
        form.description.push('y');
        assert_eq!(
            build_request(&form, Some(IMAGE)),
            Err(vec![HostField::Title, HostField::Description])
        );
    }

    #[test]
    fn test_number_rules() {
        let mut form = valid_form();
        form.num_of_guests = "0".into();
        form.price = "-1".into();
        assert_eq!(
            build_request(&form, Some(IMAGE)),
            Err(vec![HostField::NumOfGuests, HostField::Price])
        );

        form.num_of_guests = "2.5".into();
        form.price = "abc".into();
        assert_eq!(
            build_request(&form, Some(IMAGE)),
            Err(vec![HostField::NumOfGuests, HostField::Price])
        );
    }

    #[test]
    fn test_empty_form_lists_every_field_in_order() {
        assert_eq!(
            build_request(&HostForm::default(), None),
            Err(HostField::ALL.to_vec())
        );
        assert_eq!(
            build_request(&HostForm::default(), Some("")),
            Err(HostField::ALL.to_vec())
        );
    }

    #[test]
    fn test_valid_submit_is_silent() {
        let notifier = RecordingNotifier::default();
        assert!(submit_attempt(&valid_form(), Some(IMAGE), &notifier).is_ok());
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_listing_type_set_from_radio_value() {
        let mut form = HostForm::default();
        form.set(HostField::ListingType, "APARTMENT".into());
        assert_eq!(form.listing_type, Some(ListingType::Apartment));
        assert_eq!(form.text(HostField::ListingType), "APARTMENT");
        form.set(HostField::ListingType, "CASTLE".into());
        assert_eq!(form.listing_type, None);
    }

    #[test]
    fn test_upload_accepts_small_jpeg() {
        let limits = AppConfig::default().upload;
        let notifier = RecordingNotifier::default();
        let mut state = ImageUploadState::default();

        assert_eq!(
            state.dispatch(UploadEvent::Started, &limits, &notifier),
            UploadEffect::None
        );
        assert!(state.in_progress);

        assert_eq!(
            state.dispatch(UploadEvent::Finished(meta("image/jpeg", 500_000)), &limits, &notifier),
            UploadEffect::Encode
        );
        assert!(state.in_progress);
        assert_eq!(state.encoded_value, None);

        assert_eq!(
            state.dispatch(UploadEvent::Encoded(IMAGE.into()), &limits, &notifier),
            UploadEffect::Stored
        );
        assert!(!state.in_progress);
        assert_eq!(state.encoded_value.as_deref(), Some(IMAGE));
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_upload_rejects_wrong_type() {
        let limits = AppConfig::default().upload;
        let notifier = RecordingNotifier::default();
        let mut state = ImageUploadState::default();
        state.dispatch(UploadEvent::Started, &limits, &notifier);

        let effect = state.dispatch(
            UploadEvent::Finished(meta("image/gif", 10)),
            &limits,
            &notifier,
        );
        assert_eq!(effect, UploadEffect::None);
        assert!(!state.in_progress);
        assert_eq!(state.encoded_value, None);
        assert_eq!(
            notifier.errors(),
            vec!["You're only able to upload valid JPG or PNG files!".to_string()]
        );
    }

    #[test]
    fn test_upload_rejects_large_file_of_any_type() {
        let limits = AppConfig::default().upload;
        for mime in ["image/jpeg", "image/png"] {
            let mut state = ImageUploadState::default();
            state.apply(UploadEvent::Started, &limits).unwrap();
            assert_eq!(
                state.apply(UploadEvent::Finished(meta(mime, 1024 * 1024)), &limits),
                Err(UiError::InvalidImageSize)
            );
            assert!(!state.in_progress);
            assert_eq!(state.encoded_value, None);
        }
    }

    #[test]
    fn test_rejection_keeps_previous_image() {
        let limits = AppConfig::default().upload;
        let mut state = ImageUploadState {
            encoded_value: Some(IMAGE.into()),
            ..ImageUploadState::default()
        };
        state.apply(UploadEvent::Started, &limits).unwrap();
        assert!(state
            .apply(UploadEvent::Finished(meta("application/pdf", 10)), &limits)
            .is_err());
        assert!(!state.in_progress);
        assert_eq!(state.encoded_value.as_deref(), Some(IMAGE));
    }

    #[test]
    fn test_failed_encode_clears_spinner_only() {
        let limits = AppConfig::default().upload;
        let mut state = ImageUploadState {
            in_progress: true,
            encoded_value: Some(IMAGE.into()),
            ticket: 1,
        };
        state.apply(UploadEvent::Failed, &limits).unwrap();
        assert!(!state.in_progress);
        assert_eq!(state.encoded_value.as_deref(), Some(IMAGE));
    }

    #[test]
    fn test_result_after_form_closed_is_dropped() {
        let limits = AppConfig::default().upload;
        let notifier = RecordingNotifier::default();
        let mut state = ImageUploadState {
            encoded_value: Some(IMAGE.into()),
            ..ImageUploadState::default()
        };
        state.dispatch(UploadEvent::Started, &limits, &notifier);
        let ticket = state.ticket;
        let before = state.clone();

        for event in [UploadEvent::Encoded("data:image/png;base64,AA==".into()), UploadEvent::Failed] {
            assert_eq!(
                state.deliver(ticket, false, event, &limits, &notifier),
                UploadEffect::None
            );
            assert_eq!(state, before);
        }
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_older_pick_cannot_overwrite_newer() {
        let limits = AppConfig::default().upload;
        let notifier = RecordingNotifier::default();
        let mut state = ImageUploadState::default();

        state.dispatch(UploadEvent::Started, &limits, &notifier);
        let first = state.ticket;
        state.dispatch(UploadEvent::Started, &limits, &notifier);
        let second = state.ticket;
        assert_ne!(first, second);

        // first file finishes last-but-one: ignored, spinner stays
        assert_eq!(
            state.deliver(first, true, UploadEvent::Encoded("first".into()), &limits, &notifier),
            UploadEffect::None
        );
        assert!(state.in_progress);
        assert_eq!(state.encoded_value, None);

        assert_eq!(
            state.deliver(second, true, UploadEvent::Encoded(IMAGE.into()), &limits, &notifier),
            UploadEffect::Stored
        );
        assert!(!state.in_progress);
        assert_eq!(state.encoded_value.as_deref(), Some(IMAGE));

        // late first result after the second one landed
        state.deliver(first, true, UploadEvent::Failed, &limits, &notifier);
        assert_eq!(state.encoded_value.as_deref(), Some(IMAGE));
    }

    #[test]
    fn test_anonymous_viewer_sees_sign_in_notice() {
        let created = MutationStatus::Succeeded(HostListingData {
            host_listing: HostListingResult { id: "l1".into() },
        });
        for viewer in [Viewer::default(), Viewer::anonymous()] {
            assert_eq!(select_view(&viewer, &MutationStatus::Idle), HostView::SignInRequired);
            assert_eq!(select_view(&viewer, &MutationStatus::InFlight), HostView::SignInRequired);
            assert_eq!(select_view(&viewer, &created), HostView::SignInRequired);
        }
    }

    #[test]
    fn test_view_precedence_for_signed_in_viewer() {
        let viewer = signed_in();
        assert_eq!(select_view(&viewer, &MutationStatus::Idle), HostView::Form);
        assert_eq!(select_view(&viewer, &MutationStatus::InFlight), HostView::Waiting);
        assert_eq!(
            select_view(
                &viewer,
                &MutationStatus::Failed(UiError::Network("HTTP 500".into()))
            ),
            HostView::Form
        );
        let created = MutationStatus::Succeeded(HostListingData {
            host_listing: HostListingResult { id: "l1".into() },
        });
        assert_eq!(select_view(&viewer, &created), HostView::Redirect("l1".into()));
    }
}
