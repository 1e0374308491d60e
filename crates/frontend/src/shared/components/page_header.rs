use leptos::prelude::*;

/// Title block used at the top of a page or in place of a form
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Extra content under the subtitle (links, actions)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <h3 class="page-header__title">{title}</h3>
            {move || subtitle.get().map(|s| view! {
                <div class="page-header__subtitle">{s}</div>
            })}
            {children.map(|c| c())}
        </div>
    }
}
