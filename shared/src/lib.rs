//! Brew scoring core for the Specialty Coffee Brewer
//!
//! This crate contains the scoring engine and the types shared between the
//! backend, the browser build (via WASM) and any other caller. Everything here
//! is a pure function of its input: no I/O, no shared state.

pub mod calculator;
pub mod engine;
pub mod flavor;
pub mod models;
pub mod validation;

pub use calculator::*;
pub use engine::*;
pub use flavor::*;
pub use models::*;
pub use validation::*;
