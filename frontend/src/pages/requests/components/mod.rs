pub mod incoming_list;
pub mod outgoing_list;
