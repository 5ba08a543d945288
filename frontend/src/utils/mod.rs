pub mod message;
pub mod redirect;
pub mod time;
pub mod validation;
