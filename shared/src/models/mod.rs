//! Domain models for the Specialty Coffee Brewer

mod recipe;
mod score;

pub use recipe::*;
pub use score::*;
