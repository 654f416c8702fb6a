use graphql_parser::query::{Document, Field, Text};
use tracing::trace;

use crate::ast::{walk_document, VisitorMut};

/// Removes every field alias, so the printed document only carries declared field names.
pub fn strip_aliases<'a, T: Text<'a>>(mut document: Document<'a, T>) -> Document<'a, T> {
    strip_aliases_mut(&mut document);
    document
}

pub fn strip_aliases_mut<'a, T: Text<'a>>(document: &mut Document<'a, T>) {
    trace!("stripping field aliases");
    walk_document(&StripAliases, document);
}

struct StripAliases;

impl<'a, T: Text<'a>> VisitorMut<'a, T> for StripAliases {
    fn enter_field(&self, field: &mut Field<'a, T>) {
        field.alias = None;
    }
}
