//! Domain layer for the Contact Manager backend.
//!
//! This crate contains the domain models (User, Contact, Address) and the
//! contact search query type. Persistence entities convert into these
//! models at the repository boundary.

pub mod models;
