//! Repository implementations for database operations.

pub mod address;
pub mod contact;
pub mod user;

pub use address::AddressRepository;
pub use contact::ContactRepository;
pub use user::UserRepository;
