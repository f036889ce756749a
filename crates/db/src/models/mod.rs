//! Row structs and the DTOs that map them to and from domain types.

pub mod character;
