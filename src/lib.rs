//! biomart - Query BioMart mart services from Rust
//!
//! This library provides:
//! - Configuration types (Attribute, Filter, Configuration and the registries over them)
//! - Configuration parsing from the mart's XML descriptor document
//! - Query request types (QueryRequest, FilterValue)
//! - Query-document compilation (the XML payload the mart executes)
//! - TSV result parsing into a labelled table
//! - A blocking transport abstraction with an HTTP implementation
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `config/` - dataset schema concepts (Attribute, Filter, Configuration, registries)
//! - `query/` - query request types (QueryRequest, FilterValue)
//! - `results/` - tabular query results (QueryResult)
//!
//! **Verb modules** (transformations):
//! - `parser/` - configuration XML → Configuration
//! - `compiler/` - validated selection → query document
//! - `results/` - TSV bytes → QueryResult
//!
//! **Orchestration**:
//! - `dataset/` - Dataset handle: lazy configuration cache, validation, dispatch
//! - `transport/` - the `get(params) -> bytes` capability and its HTTP implementation
//!
//! # Example
//!
//! ```ignore
//! use biomart::{Dataset, FilterValue, HttpTransport, QueryRequest};
//!
//! let transport = HttpTransport::new(biomart::transport::DEFAULT_SERVICE_URL)?;
//! let dataset = Dataset::new("mmusculus_gene_ensembl", "Mus musculus genes", transport);
//!
//! let request = QueryRequest {
//!     attributes: vec!["ensembl_gene_id".to_string()],
//!     filters: vec![("chromosome_name".to_string(), FilterValue::from(vec!["1"]))],
//!     ..Default::default()
//! };
//! let result = dataset.query(&request)?;
//! for row in result.rows() {
//!     println!("{}", row.join("\t"));
//! }
//! ```

pub mod compiler;
pub mod config;
pub mod dataset;
pub mod error;
pub mod parser;
pub mod query;
pub mod results;
pub mod transport;

// Re-export commonly used types
pub use compiler::{compile_query, CompileError, ResolvedFilter};
pub use config::{
    Attribute, AttributeRegistry, Configuration, DuplicateNameError, Filter, FilterRegistry,
    NameKind, UnknownNameError,
};
pub use dataset::{Dataset, QueryError};
pub use error::ConfigParseError;
pub use parser::parse_configuration;
pub use query::{FilterValue, QueryRequest};
pub use results::{parse_result, MalformedResultError, QueryResult};
pub use transport::{HttpTransport, Transport, TransportError};
