use crate::{
    components::{
        confirm_dialog::ConfirmDialog,
        layout::{Layout, MessageBanner},
    },
    pages::dashboard::{
        components::{event_form_dialog::EventFormDialog, event_list::EventList},
        view_model::DashboardViewModel,
    },
    state::query::QueryState,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = DashboardViewModel::new();
    let status_pending = vm.status_action.pending();
    let delete_pending = vm.delete_action.pending();

    let on_edit = Callback::new(move |event| vm.open_edit(&event));
    let on_toggle = Callback::new(move |event| {
        vm.toggle_status(&event);
    });
    let on_delete = Callback::new(move |event| vm.request_delete(&event));

    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|event| format!("\"{}\" will be removed permanently.", event.title))
            .unwrap_or_default()
    });

    let events_view = move || {
        view! {
            <EventList
                state=QueryState::from(vm.events.get())
                on_edit=on_edit
                on_toggle=on_toggle
                on_delete=on_delete
                busy=status_pending
            />
        }
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">"My events"</h1>
                        <p class="mt-1 text-sm text-fg-muted">
                            "Manage your calendar and choose which slots you are willing to swap."
                        </p>
                    </div>
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        on:click=move |_| vm.open_create()
                    >
                        "New event"
                    </button>
                </div>
                <MessageBanner state=vm.message />
                {events_view}
            </div>
            <EventFormDialog
                editor=vm.editor
                form=vm.form
                error=vm.editor_error
                pending=vm.editor_pending()
                on_submit=Callback::new(move |_| {
                    vm.submit_editor();
                })
                on_cancel=Callback::new(move |_| vm.close_editor())
            />
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.get().is_some())
                title="Delete event"
                message=delete_message
                confirm_label="Delete"
                destructive=true
                pending=delete_pending
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </Layout>
    }
}
