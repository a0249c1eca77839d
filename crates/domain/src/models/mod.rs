//! Domain models for the Contact Manager.

pub mod address;
pub mod contact;
pub mod user;

pub use address::Address;
pub use contact::{Contact, ContactSearchQuery};
pub use user::User;
