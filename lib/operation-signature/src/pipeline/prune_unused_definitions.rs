use std::collections::{HashMap, HashSet, VecDeque};

use graphql_parser::query::{
    Definition, Document, FragmentDefinition, Selection, SelectionSet, Text,
};
use tracing::debug;

use crate::ast::OperationDefinitionExt;

/// A document may contain multiple operations, with the one to use chosen
/// separately by the client. This drops every other operation, as well as any
/// fragment definition the chosen operation does not reach through its spreads.
///
/// Anonymous operations are matched by an empty `operation_name`. When several
/// operations share the name, the last one is kept. When nothing matches, the
/// document is returned as-is.
pub fn prune_unused_definitions<'a, T: Text<'a>>(
    document: Document<'a, T>,
    operation_name: &str,
) -> Document<'a, T> {
    let Some(operation_index) = find_operation_index(&document, operation_name) else {
        debug!(
            operation_name,
            "operation not found in document, keeping all definitions"
        );
        return document;
    };

    let keep: Vec<bool> = {
        let used_fragments = collect_used_fragments(&document, operation_index);

        debug!(
            operation_name,
            used_fragments = used_fragments.len(),
            "dropping unused definitions"
        );

        document
            .definitions
            .iter()
            .enumerate()
            .map(|(index, definition)| match definition {
                Definition::Operation(_) => index == operation_index,
                Definition::Fragment(fragment) => {
                    let fragment_name: &str = fragment.name.as_ref();
                    used_fragments.contains(fragment_name)
                }
            })
            .collect()
    };

    let definitions = document
        .definitions
        .into_iter()
        .zip(keep)
        .filter_map(|(definition, keep)| keep.then_some(definition))
        .collect();

    Document { definitions }
}

fn find_operation_index<'a, T: Text<'a>>(
    document: &Document<'a, T>,
    operation_name: &str,
) -> Option<usize> {
    document
        .definitions
        .iter()
        .rposition(|definition| match definition {
            Definition::Operation(operation) => operation.name().unwrap_or("") == operation_name,
            Definition::Fragment(_) => false,
        })
}

/// Names of all fragments transitively spread by the operation at `operation_index`.
fn collect_used_fragments<'d, 'a, T: Text<'a>>(
    document: &'d Document<'a, T>,
    operation_index: usize,
) -> HashSet<&'d str> {
    let fragments: HashMap<&str, &FragmentDefinition<'a, T>> = document
        .definitions
        .iter()
        .filter_map(|definition| match definition {
            Definition::Fragment(fragment) => Some((fragment.name.as_ref(), fragment)),
            Definition::Operation(_) => None,
        })
        .collect();

    let mut used: HashSet<&str> = HashSet::new();
    let mut pending: VecDeque<&str> = VecDeque::new();

    if let Some(Definition::Operation(operation)) = document.definitions.get(operation_index) {
        collect_spreads(operation.selection_set(), &mut pending);
    }

    while let Some(fragment_name) = pending.pop_front() {
        if !used.insert(fragment_name) {
            continue;
        }

        // spreads of unknown fragments have nothing to keep
        if let Some(fragment) = fragments.get(fragment_name) {
            collect_spreads(&fragment.selection_set, &mut pending);
        }
    }

    used
}

fn collect_spreads<'d, 'a, T: Text<'a>>(
    selection_set: &'d SelectionSet<'a, T>,
    pending: &mut VecDeque<&'d str>,
) {
    for selection in &selection_set.items {
        match selection {
            Selection::Field(field) => collect_spreads(&field.selection_set, pending),
            Selection::FragmentSpread(spread) => {
                pending.push_back(spread.fragment_name.as_ref());
            }
            Selection::InlineFragment(fragment) => {
                collect_spreads(&fragment.selection_set, pending);
            }
        }
    }
}
