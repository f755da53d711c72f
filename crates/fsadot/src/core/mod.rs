//! Core abstractions for automaton processing
//!
//! This module defines the traits shared by the description parser and the
//! graph renderers, plus the common error, logging and data types.

mod database;
mod error;
pub mod logging;
mod parser;
mod renderer;
mod types;

pub use database::*;
pub use error::*;
pub use logging::*;
pub use parser::*;
pub use renderer::*;
pub use types::*;
