//! Response engine for Chatterbox.
//!
//! Owns the pattern/response tables and the classify-and-respond algorithm:
//! first-match-wins keyword lookup over ordered categories, with a uniformly
//! random pick from the matched category's reply pool.

pub mod engine;
pub mod error;
pub mod table;

pub use engine::ResponseEngine;
pub use error::TableError;
pub use table::{Category, ResponseTable};
