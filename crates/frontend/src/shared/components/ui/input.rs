use leptos::prelude::*;

use super::field::FieldFooter;

/// Input component with label support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Lower bound for number inputs
    #[prop(optional, into)]
    min: MaybeProp<String>,
    /// Maximum length in characters
    #[prop(optional)]
    max_length: Option<usize>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Help text under the input
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    /// Validation message, shown when set
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_class = move || {
        if error.get().is_some() {
            "form__input form__input--invalid"
        } else {
            "form__input"
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=input_class
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                min=move || min.get()
                maxlength=max_length
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            <FieldFooter hint=hint error=error />
        </div>
    }
}
