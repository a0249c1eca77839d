//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod address;
pub mod contact;
pub mod user;

pub use address::AddressEntity;
pub use contact::ContactEntity;
pub use user::UserEntity;
