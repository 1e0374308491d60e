use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

/// Primary action button; shows a spinner and ignores clicks while `loading`
#[component]
pub fn Button(
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute: "button" (default) or "submit"
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Pending request behind this button
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let is_loading = move || loading.get().unwrap_or(false);
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button button--primary {}", class.get().unwrap_or_default())
            disabled=is_loading
            aria-busy=move || is_loading().to_string()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {move || is_loading().then(|| view! { <Spinner size=SpinnerSize::Tiny /> })}
            {children()}
        </button>
    }
}
