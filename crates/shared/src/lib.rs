//! Shared utilities and common types for the Contact Manager backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Password hashing with Argon2id
//! - Opaque session-token generation
//! - Page/offset pagination math
//! - Common validation logic

pub mod pagination;
pub mod password;
pub mod token;
pub mod validation;
