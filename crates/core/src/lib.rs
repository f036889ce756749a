//! Charforge generation core.
//!
//! Pure, I/O-free building blocks: seed hashing and random streams, sampling
//! primitives, the character assembler, bulk expansion, and the response
//! field filter. Reference pools are injected, never global.

pub mod character;
pub mod error;
pub mod filter;
pub mod generator;
pub mod pools;
pub mod rng;
pub mod sampling;
pub mod types;
