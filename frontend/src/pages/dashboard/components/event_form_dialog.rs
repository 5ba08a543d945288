use crate::{
    api::ApiError,
    components::{
        error::InlineErrorMessage,
        forms::{field_error, TextField},
    },
    pages::dashboard::view_model::{EventEditor, EventFormState},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EventFormDialog(
    editor: RwSignal<Option<EventEditor>>,
    form: EventFormState,
    error: RwSignal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let heading = move || editor.get().map(|mode| mode.title()).unwrap_or_default();
    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <Show when=move || editor.get().is_some()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <form
                    class="relative z-[61] w-full max-w-lg rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    novalidate=true
                    on:submit=submit
                >
                    <h2 class="text-lg font-semibold text-fg">{heading}</h2>
                    <TextField
                        id="event-title"
                        label="Title"
                        value=form.title
                        error=field_error(form.errors, "title")
                    />
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                        <TextField
                            id="event-start"
                            label="Start time"
                            input_type="datetime-local"
                            value=form.start_time
                            error=field_error(form.errors, "start_time")
                        />
                        <TextField
                            id="event-end"
                            label="End time"
                            input_type="datetime-local"
                            value=form.end_time
                            error=field_error(form.errors, "end_time")
                        />
                    </div>
                    <InlineErrorMessage error=error />
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                            on:click=move |_| on_cancel.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                            disabled=move || pending.get()
                        >
                            {move || if pending.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::EventStatus;
    use crate::test_support::ssr::render_to_string;
    use crate::utils::validation::FieldErrors;

    #[test]
    fn edit_dialog_shows_heading_and_field_errors() {
        let html = render_to_string(move || {
            let form = EventFormState::default();
            let mut errors = FieldErrors::default();
            errors.push("end_time", "End time must be after start time");
            form.errors.set(errors);
            view! {
                <EventFormDialog
                    editor=create_rw_signal(Some(EventEditor::Edit { id: 1, status: EventStatus::Busy }))
                    form=form
                    error=create_rw_signal(None)
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Edit event"));
        assert!(html.contains("End time must be after start time"));
        assert!(html.contains("type=\"datetime-local\""));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let html = render_to_string(move || {
            view! {
                <EventFormDialog
                    editor=create_rw_signal(None)
                    form=EventFormState::default()
                    error=create_rw_signal(None)
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("role=\"dialog\""));
    }
}
