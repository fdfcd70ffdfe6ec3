//! Query request types (nouns)

mod request;

pub use request::{FilterValue, QueryRequest};
