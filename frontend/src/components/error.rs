use crate::api::ApiError;
use leptos::*;

/// Backend or transport failure shown next to the control that triggered it.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-medium">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().and_then(|e| detail_lines(&e)).map(|lines| view! {
                    <ul class="list-disc list-inside text-sm">
                        {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                    </ul>
                })}
            </div>
        </Show>
    }
}

fn detail_lines(error: &ApiError) -> Option<Vec<String>> {
    let errors = error.details.as_ref()?.get("errors")?.as_array()?;
    let lines: Vec<String> = errors
        .iter()
        .filter_map(|value| value.as_str().map(str::to_string))
        .collect();
    (!lines.is_empty()).then_some(lines)
}
