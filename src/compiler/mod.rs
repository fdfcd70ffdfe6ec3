//! Query compiler (verb module)
//!
//! Transforms a validated attribute/filter selection into the XML query
//! document the mart executes.

mod compile;
mod error;

pub use compile::{compile_query, ResolvedFilter};
pub use error::CompileError;
