use std::cmp::Ordering;

use graphql_parser::query::{
    Directive, Document, Field, FragmentDefinition, FragmentSpread, InlineFragment,
    OperationDefinition, SelectionSet, Text, Value,
};
use tracing::trace;

use crate::ast::{walk_document, OperationDefinitionExt, SortKeyExt, VisitorMut};

/// Sorts most multi-child nodes alphabetically, so documents that only differ
/// in the order of their definitions, selections, variables or arguments
/// print the same.
///
/// Directives are only reordered on fragment spreads, inline fragments and
/// fragment definitions. Operations and fields keep their directives in
/// source order.
///
/// All sorts are stable. Siblings of different kinds are ordered by kind first
/// (fragment definitions before operations, fields before fragment spreads
/// before inline fragments), then by name. A node without a name (an anonymous
/// operation, an inline fragment without a type condition) comes before its
/// named siblings of the same kind.
pub fn canonical_sort<'a, T: Text<'a>>(mut document: Document<'a, T>) -> Document<'a, T> {
    canonical_sort_mut(&mut document);
    document
}

pub fn canonical_sort_mut<'a, T: Text<'a>>(document: &mut Document<'a, T>) {
    trace!("sorting document");
    walk_document(&CanonicalSort, document);
}

struct CanonicalSort;

impl<'a, T: Text<'a>> VisitorMut<'a, T> for CanonicalSort {
    fn enter_document(&self, document: &mut Document<'a, T>) {
        document.definitions.sort_by(compare_by_kind_and_name);
    }

    fn enter_operation(&self, operation: &mut OperationDefinition<'a, T>) {
        if let Some(variable_definitions) = operation.variable_definitions_mut() {
            variable_definitions.sort_by(|a, b| a.name.cmp(&b.name));
        }
    }

    fn enter_fragment_definition(&self, fragment: &mut FragmentDefinition<'a, T>) {
        sort_directives(&mut fragment.directives);
    }

    fn enter_selection_set(&self, selection_set: &mut SelectionSet<'a, T>) {
        selection_set.items.sort_by(compare_by_kind_and_name);
    }

    fn enter_field(&self, field: &mut Field<'a, T>) {
        sort_arguments(&mut field.arguments);
    }

    fn enter_fragment_spread(&self, fragment_spread: &mut FragmentSpread<'a, T>) {
        sort_directives(&mut fragment_spread.directives);
    }

    fn enter_inline_fragment(&self, inline_fragment: &mut InlineFragment<'a, T>) {
        sort_directives(&mut inline_fragment.directives);
    }

    fn enter_directive(&self, directive: &mut Directive<'a, T>) {
        sort_arguments(&mut directive.arguments);
    }
}

fn compare_by_kind_and_name<N: SortKeyExt>(a: &N, b: &N) -> Ordering {
    (a.kind_name(), a.sort_name()).cmp(&(b.kind_name(), b.sort_name()))
}

fn sort_directives<'a, T: Text<'a>>(directives: &mut [Directive<'a, T>]) {
    directives.sort_by(|a, b| a.name.cmp(&b.name));
}

fn sort_arguments<'a, T: Text<'a>>(arguments: &mut [(T::Value, Value<'a, T>)]) {
    arguments.sort_by(|(a, _), (b, _)| a.cmp(b));
}
