use leptos::prelude::*;

use super::field::FieldFooter;
use crate::shared::icons::icon;

#[derive(Debug, Clone, PartialEq)]
pub struct RadioOption {
    pub value: String,
    pub label: String,
    /// Name understood by `shared::icons::icon`
    pub icon: Option<&'static str>,
}

/// Radio rendered as a toggle button
#[component]
pub fn Radio(
    option: RadioOption,
    /// Current selected value
    #[prop(into)]
    checked_value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
) -> impl IntoView {
    let RadioOption { value, label, icon: icon_name } = option;
    let radio_id = format!("{}-{}", name, value.to_lowercase());
    let radio_for = radio_id.clone();
    let value_for_check = value.clone();
    let value_for_change = value.clone();

    let is_checked = move || checked_value.get() == value_for_check;
    let wrapper_class = {
        let is_checked = is_checked.clone();
        move || {
            if is_checked() {
                "form__radio-button form__radio-button--checked"
            } else {
                "form__radio-button"
            }
        }
    };

    view! {
        <label class=wrapper_class for=radio_for>
            <input
                id=radio_id
                type="radio"
                class="form__radio"
                name=name
                value=value
                checked=is_checked
                on:change=move |_| {
                    if let Some(handler) = on_change {
                        handler.run(value_for_change.clone());
                    }
                }
            />
            {icon_name.map(icon)}
            <span class="form__radio-label">{label}</span>
        </label>
    }
}

/// Radio group component
#[component]
pub fn RadioGroup(
    /// Label for the group
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current selected value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    options: Vec<RadioOption>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="form__group" role="radiogroup">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <div class="form__radio-group">
                {options
                    .into_iter()
                    .map(|option| view! {
                        <Radio
                            option=option
                            checked_value=value
                            on_change=on_change.unwrap_or_else(|| Callback::new(|_| {}))
                            name=name.clone()
                        />
                    })
                    .collect_view()}
            </div>
            <FieldFooter hint=MaybeProp::default() error=error />
        </div>
    }
}
