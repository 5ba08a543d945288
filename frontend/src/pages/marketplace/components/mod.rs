pub mod slot_card;
pub mod swap_dialog;
