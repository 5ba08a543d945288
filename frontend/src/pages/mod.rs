pub mod dashboard;
pub mod home;
pub mod login;
pub mod marketplace;
pub mod register;
pub mod requests;
