//! Request handlers.
//!
//! Handlers validate query input, call into `charforge_core` for
//! generation and `charforge_db` for persistence, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod character;
