use crate::utils::validation::FieldErrors;
use leptos::*;
use web_sys::HtmlInputElement;

/// First message recorded for `field`, tracked.
pub fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|errors| errors.first(field).map(str::to_string)))
}

#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! { <p class="mt-1 text-sm text-status-error-text">{message}</p> }
        })
    }
}

#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] autocomplete: Option<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    let input_class = move || {
        let border = if error.with(Option::is_some) {
            "border-status-error-border"
        } else {
            "border-border"
        };
        format!(
            "mt-1 block w-full rounded-md border {} bg-surface px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus",
            border
        )
    };

    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id.clone()
                name=id
                type=input_type
                autocomplete=autocomplete
                class=input_class
                aria-invalid=move || error.with(Option::is_some).to_string()
                prop:value=move || value.get()
                on:input=move |ev| {
                    let target = event_target::<HtmlInputElement>(&ev);
                    value.set(target.value());
                }
            />
            <FieldError error=error/>
        </div>
    }
}
