pub mod ext;
pub mod visitor;

pub use ext::{OperationDefinitionExt, SortKeyExt};
pub use visitor::{walk_document, VisitFlow, VisitorMut};
