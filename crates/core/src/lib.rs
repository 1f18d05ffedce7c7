//! Domain types and pure analysis logic for the architecture risk service.
//!
//! Everything in this crate is synchronous and I/O-free: the input/report
//! data model, the seed derivation, and the deterministic fallback report
//! generator. The HTTP surface and the Gemini client live in their own
//! crates and depend on this one.

pub mod error;
pub mod fallback;
pub mod input;
pub mod report;
pub mod seed;
