//! Reading and parsing input documents

pub mod error;
pub mod parser;
pub mod source;

pub use error::DocumentError;
pub use parser::{parse_document, parse_documents};
pub use source::{read_source, InputSource};
