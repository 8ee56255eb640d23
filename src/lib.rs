//! Swagger `definitions` → resolved type model → TypeScript declarations.
//!
//! ```text
//! load::load_document ─▶ extract::extract ─▶ codegen::Codegen
//! ```
pub mod cli;
pub mod codegen;
pub mod error;
pub mod extract;
pub mod jq_exec;
pub mod load;
pub mod model;
pub mod naming;
pub mod schema;

pub use codegen::{Codegen, CodegenOptions};
pub use error::{ExtractError, LoadError};
pub use extract::{extract, ExtractOptions, TypeNames};
pub use model::{Class, Enum, Property, TypeModel};
pub use schema::SchemaDocument;
