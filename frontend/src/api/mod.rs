mod auth;
pub mod client;
mod events;
mod swaps;
pub mod types;

pub use client::*;
pub use types::*;
