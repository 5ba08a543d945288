pub mod event_card;
pub mod event_form_dialog;
pub mod event_list;
