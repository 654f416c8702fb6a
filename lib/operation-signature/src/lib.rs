//! Operation Signature
//! ===================
//!
//! Transforms that canonicalize GraphQL operation documents, so operations that
//! only differ in formatting, ordering, aliases or hard-coded values can be
//! logged, cached and deduplicated under one key.
//!
//! Every pass takes a parsed `graphql_parser` document by value, rewrites it in
//! place and hands it back, so passes chain in any order:
//!
//! - [`prune_unused_definitions`]: keep one operation and the fragments it uses
//! - [`mask_literals`] / [`mask_string_and_numeric_literals`]: hide hard-coded values
//! - [`strip_aliases`]: drop field aliases
//! - [`canonical_sort`]: order siblings by kind and name
//! - [`print_compact`]: print with as little whitespace as possible
//!
//! ```rust
//! use graphql_parser::parse_query;
//! use operation_signature::{print_compact, strip_aliases};
//!
//! let document = parse_query::<&str>(r#"query Q { a: foo(x: 1, y: "s") bar baz }"#).unwrap();
//! let printed = print_compact(strip_aliases(document)).unwrap();
//!
//! assert_eq!(printed, r#"query Q{foo(x:1,y:"s")bar baz}"#);
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod printer;
pub mod processor;
pub mod signature;

#[cfg(test)]
mod tests;

pub use config::{LiteralMasking, SignatureConfig};
pub use error::SignatureError;
pub use pipeline::{
    canonical_sort, mask_literals, mask_string_and_numeric_literals, prune_unused_definitions,
    strip_aliases,
};
pub use printer::print_compact;
pub use processor::{OperationSignature, SignatureProcessor};
pub use signature::{default_signature, operation_registry_signature, SignaturePipeline};
