use leptos::prelude::*;

/// Hint and validation message rendered under a form control
#[component]
pub fn FieldFooter(
    #[prop(into)] hint: MaybeProp<String>,
    #[prop(into)] error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! {
            <div class="form__error" role="alert">{e}</div>
        })}
        {move || hint.get().map(|h| view! {
            <div class="form__hint">{h}</div>
        })}
    }
}
