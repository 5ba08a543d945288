use crate::api::{ApiClient, ApiError, Event, EventPayload, EventStatus};
use crate::pages::dashboard::repository::EventsRepository;
use crate::state::query::{use_mutation, use_query, Mutation, QueryKey, QueryResource};
use crate::utils::{
    message::MessageState,
    time::to_datetime_local_input,
    validation::{EventForm, FieldErrors},
};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventEditor {
    Create,
    Edit { id: i64, status: EventStatus },
}

impl EventEditor {
    pub fn title(&self) -> &'static str {
        match self {
            EventEditor::Create => "New event",
            EventEditor::Edit { .. } => "Edit event",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventUpdate {
    pub id: i64,
    pub payload: EventPayload,
}

#[derive(Clone, Copy)]
pub struct EventFormState {
    pub title: RwSignal<String>,
    pub start_time: RwSignal<String>,
    pub end_time: RwSignal<String>,
    pub errors: RwSignal<FieldErrors>,
}

impl Default for EventFormState {
    fn default() -> Self {
        Self {
            title: create_rw_signal(String::new()),
            start_time: create_rw_signal(String::new()),
            end_time: create_rw_signal(String::new()),
            errors: create_rw_signal(FieldErrors::default()),
        }
    }
}

impl EventFormState {
    pub fn snapshot(&self) -> EventForm {
        EventForm {
            title: self.title.get_untracked(),
            start_time: self.start_time.get_untracked(),
            end_time: self.end_time.get_untracked(),
        }
    }

    pub fn load(&self, form: EventForm) {
        self.title.set(form.title);
        self.start_time.set(form.start_time);
        self.end_time.set(form.end_time);
        self.errors.set(FieldErrors::default());
    }

    pub fn reset(&self) {
        self.load(EventForm::default());
    }
}

pub fn form_for_event(event: &Event) -> EventForm {
    EventForm {
        title: event.title.clone(),
        start_time: to_datetime_local_input(&event.start_time),
        end_time: to_datetime_local_input(&event.end_time),
    }
}

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub events: QueryResource<Vec<Event>>,
    pub editor: RwSignal<Option<EventEditor>>,
    pub form: EventFormState,
    pub editor_error: RwSignal<Option<ApiError>>,
    pub message: RwSignal<MessageState>,
    pub pending_delete: RwSignal<Option<Event>>,
    pub create_action: Action<EventPayload, Result<Event, ApiError>>,
    pub update_action: Action<EventUpdate, Result<Event, ApiError>>,
    pub status_action: Action<(i64, EventStatus), Result<Event, ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
}

fn apply_save_result(
    result: Option<Result<Event, ApiError>>,
    editor: RwSignal<Option<EventEditor>>,
    editor_error: RwSignal<Option<ApiError>>,
    form: EventFormState,
    message: RwSignal<MessageState>,
    success: &str,
) {
    match result {
        Some(Ok(_)) => {
            editor.set(None);
            editor_error.set(None);
            form.reset();
            message.update(|msg| msg.set_success(success));
        }
        Some(Err(err)) => editor_error.set(Some(err)),
        None => {}
    }
}

fn apply_list_result<T>(
    result: Option<Result<T, ApiError>>,
    message: RwSignal<MessageState>,
    success: &str,
) {
    match result {
        Some(Ok(_)) => message.update(|msg| msg.set_success(success)),
        Some(Err(err)) => message.update(|msg| msg.set_error(err)),
        None => {}
    }
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(EventsRepository::new(api));

        let events = use_query(QueryKey::MyEvents, move || {
            let repo = repository.get_value();
            async move { repo.list_my_events().await }
        });

        let create_action = use_mutation(Mutation::CreateEvent, move |payload: &EventPayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.create_event(payload).await }
        });

        let update_action = use_mutation(Mutation::UpdateEvent, move |update: &EventUpdate| {
            let repo = repository.get_value();
            let update = update.clone();
            async move { repo.update_event(update.id, update.payload).await }
        });

        let status_action = use_mutation(
            Mutation::UpdateEventStatus,
            move |(id, status): &(i64, EventStatus)| {
                let repo = repository.get_value();
                let (id, status) = (*id, *status);
                async move { repo.update_event_status(id, status).await }
            },
        );

        let delete_action = use_mutation(Mutation::DeleteEvent, move |id: &i64| {
            let repo = repository.get_value();
            let id = *id;
            async move { repo.delete_event(id).await }
        });

        let editor = create_rw_signal(None::<EventEditor>);
        let form = EventFormState::default();
        let editor_error = create_rw_signal(None::<ApiError>);
        let message = create_rw_signal(MessageState::default());
        let pending_delete = create_rw_signal(None::<Event>);

        create_effect(move |_| {
            apply_save_result(
                create_action.value().get(),
                editor,
                editor_error,
                form,
                message,
                "Event created.",
            );
        });
        create_effect(move |_| {
            apply_save_result(
                update_action.value().get(),
                editor,
                editor_error,
                form,
                message,
                "Event updated.",
            );
        });
        create_effect(move |_| {
            apply_list_result(status_action.value().get(), message, "Status updated.");
        });
        create_effect(move |_| {
            let result = delete_action.value().get();
            if result.is_some() {
                pending_delete.set(None);
            }
            apply_list_result(result, message, "Event deleted.");
        });

        Self {
            events,
            editor,
            form,
            editor_error,
            message,
            pending_delete,
            create_action,
            update_action,
            status_action,
            delete_action,
        }
    }

    pub fn open_create(&self) {
        self.form.reset();
        self.editor_error.set(None);
        self.editor.set(Some(EventEditor::Create));
    }

    pub fn open_edit(&self, event: &Event) {
        if event.status.is_locked() {
            return;
        }
        self.form.load(form_for_event(event));
        self.editor_error.set(None);
        self.editor.set(Some(EventEditor::Edit {
            id: event.id,
            status: event.status,
        }));
    }

    pub fn close_editor(&self) {
        self.editor.set(None);
        self.editor_error.set(None);
        self.form.reset();
    }

    pub fn editor_pending(&self) -> Signal<bool> {
        let create = self.create_action.pending();
        let update = self.update_action.pending();
        Signal::derive(move || create.get() || update.get())
    }

    /// Validates the open editor and dispatches the matching mutation.
    pub fn submit_editor(&self) -> bool {
        let Some(mode) = self.editor.get_untracked() else {
            return false;
        };
        if self.editor_pending().get_untracked() {
            return false;
        }
        let draft = match self.form.snapshot().check() {
            Ok(draft) => draft,
            Err(errors) => {
                self.form.errors.set(errors);
                return false;
            }
        };
        self.form.errors.set(FieldErrors::default());
        self.editor_error.set(None);
        match mode {
            EventEditor::Create => self
                .create_action
                .dispatch(draft.into_payload(EventStatus::Busy)),
            EventEditor::Edit { id, status } => self.update_action.dispatch(EventUpdate {
                id,
                payload: draft.into_payload(status),
            }),
        }
        true
    }

    pub fn toggle_status(&self, event: &Event) -> bool {
        match event.status.toggled() {
            Some(next) if !self.status_action.pending().get_untracked() => {
                self.message.update(|msg| msg.clear());
                self.status_action.dispatch((event.id, next));
                true
            }
            _ => false,
        }
    }

    pub fn request_delete(&self, event: &Event) {
        if !event.status.is_locked() {
            self.pending_delete.set(Some(event.clone()));
        }
    }

    pub fn confirm_delete(&self) {
        if let Some(event) = self.pending_delete.get_untracked() {
            self.message.update(|msg| msg.clear());
            self.delete_action.dispatch(event.id);
        }
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::sample_event;
    use crate::test_support::ssr::{with_idle_resources, with_runtime};

    #[test]
    fn edit_prefills_form_and_keeps_status() {
        with_idle_resources(|| {
            let vm = DashboardViewModel::new();
            let event = sample_event(4, EventStatus::Swappable);
            vm.open_edit(&event);
            assert_eq!(
                vm.editor.get(),
                Some(EventEditor::Edit {
                    id: 4,
                    status: EventStatus::Swappable
                })
            );
            assert_eq!(vm.form.title.get(), "Event 4");
            let draft = vm.form.snapshot().check().unwrap();
            assert_eq!(draft.start_time, event.start_time);
            assert_eq!(draft.end_time, event.end_time);
        });
    }

    #[test]
    fn swap_pending_events_cannot_be_edited_toggled_or_deleted() {
        with_idle_resources(|| {
            let vm = DashboardViewModel::new();
            let event = sample_event(5, EventStatus::SwapPending);
            vm.open_edit(&event);
            assert!(vm.editor.get().is_none());
            assert!(!vm.toggle_status(&event));
            assert_eq!(vm.status_action.version().get_untracked(), 0);
            vm.request_delete(&event);
            assert!(vm.pending_delete.get().is_none());
        });
    }

    #[test]
    fn invalid_editor_is_not_submitted() {
        with_idle_resources(|| {
            let vm = DashboardViewModel::new();
            vm.open_create();
            vm.form.title.set("Standup".into());
            vm.form.start_time.set("2024-01-01T10:00:00Z".into());
            vm.form.end_time.set("2024-01-01T09:00:00Z".into());
            assert!(!vm.submit_editor());
            assert_eq!(vm.create_action.version().get_untracked(), 0);
            assert_eq!(
                vm.form.errors.get().first("end_time"),
                Some("End time must be after start time")
            );
        });
    }

    #[test]
    fn save_failure_keeps_editor_open() {
        with_runtime(|| {
            let editor = create_rw_signal(Some(EventEditor::Create));
            let editor_error = create_rw_signal(None);
            let form = EventFormState::default();
            let message = create_rw_signal(MessageState::default());
            form.title.set("Draft".into());

            apply_save_result(
                Some(Err(ApiError::http(500, "db down"))),
                editor,
                editor_error,
                form,
                message,
                "Event created.",
            );
            assert_eq!(editor.get(), Some(EventEditor::Create));
            assert_eq!(form.title.get(), "Draft");
            assert_eq!(editor_error.get().map(|e| e.error), Some("db down".into()));

            apply_save_result(
                Some(Ok(sample_event(1, EventStatus::Busy))),
                editor,
                editor_error,
                form,
                message,
                "Event created.",
            );
            assert!(editor.get().is_none());
            assert!(form.title.get().is_empty());
            assert_eq!(message.get().success.as_deref(), Some("Event created."));
        });
    }

    #[test]
    fn delete_confirmation_can_be_cancelled() {
        with_idle_resources(|| {
            let vm = DashboardViewModel::new();
            vm.request_delete(&sample_event(2, EventStatus::Busy));
            assert_eq!(vm.pending_delete.get().map(|e| e.id), Some(2));
            vm.cancel_delete();
            assert!(vm.pending_delete.get().is_none());
            assert_eq!(vm.delete_action.version().get_untracked(), 0);
        });
    }
}
