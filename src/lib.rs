pub mod ast;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Document, Value};
pub use config::OmflConfig;
pub use error::OmflError;
pub use parser::{parse, parse_file};
