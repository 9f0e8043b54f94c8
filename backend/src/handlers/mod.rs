//! HTTP request handlers

mod brew;
mod health;

pub use brew::*;
pub use health::*;
