use graphql_parser::query::{
    Definition, OperationDefinition, Selection, SelectionSet, Text, TypeCondition,
    VariableDefinition,
};

pub trait OperationDefinitionExt<'a, T: Text<'a>> {
    fn name(&self) -> Option<&str>;
    fn selection_set(&self) -> &SelectionSet<'a, T>;
    fn variable_definitions_mut(&mut self) -> Option<&mut Vec<VariableDefinition<'a, T>>>;
}

impl<'a, T: Text<'a>> OperationDefinitionExt<'a, T> for OperationDefinition<'a, T> {
    fn name(&self) -> Option<&str> {
        match self {
            OperationDefinition::Query(query) => query.name.as_ref().map(|name| name.as_ref()),
            OperationDefinition::Mutation(mutation) => {
                mutation.name.as_ref().map(|name| name.as_ref())
            }
            OperationDefinition::Subscription(subscription) => {
                subscription.name.as_ref().map(|name| name.as_ref())
            }
            OperationDefinition::SelectionSet(_) => None,
        }
    }

    fn selection_set(&self) -> &SelectionSet<'a, T> {
        match self {
            OperationDefinition::Query(query) => &query.selection_set,
            OperationDefinition::Mutation(mutation) => &mutation.selection_set,
            OperationDefinition::Subscription(subscription) => &subscription.selection_set,
            OperationDefinition::SelectionSet(selection_set) => selection_set,
        }
    }

    /// `None` for the `{ ... }` shorthand, which cannot declare variables.
    fn variable_definitions_mut(&mut self) -> Option<&mut Vec<VariableDefinition<'a, T>>> {
        match self {
            OperationDefinition::Query(query) => Some(&mut query.variable_definitions),
            OperationDefinition::Mutation(mutation) => Some(&mut mutation.variable_definitions),
            OperationDefinition::Subscription(subscription) => {
                Some(&mut subscription.variable_definitions)
            }
            OperationDefinition::SelectionSet(_) => None,
        }
    }
}

/// Names used when ordering sibling nodes of different kinds.
pub trait SortKeyExt {
    /// The node kind, compared before the name so different kinds never interleave.
    fn kind_name(&self) -> &'static str;
    /// The node name, `None` when the node has none.
    fn sort_name(&self) -> Option<&str>;
}

impl<'a, T: Text<'a>> SortKeyExt for Definition<'a, T> {
    fn kind_name(&self) -> &'static str {
        match self {
            Definition::Operation(_) => "OperationDefinition",
            Definition::Fragment(_) => "FragmentDefinition",
        }
    }

    fn sort_name(&self) -> Option<&str> {
        match self {
            Definition::Operation(operation) => operation.name(),
            Definition::Fragment(fragment) => Some(fragment.name.as_ref()),
        }
    }
}

impl<'a, T: Text<'a>> SortKeyExt for Selection<'a, T> {
    fn kind_name(&self) -> &'static str {
        match self {
            Selection::Field(_) => "Field",
            Selection::FragmentSpread(_) => "FragmentSpread",
            Selection::InlineFragment(_) => "InlineFragment",
        }
    }

    fn sort_name(&self) -> Option<&str> {
        match self {
            Selection::Field(field) => Some(field.name.as_ref()),
            Selection::FragmentSpread(spread) => Some(spread.fragment_name.as_ref()),
            Selection::InlineFragment(fragment) => {
                fragment.type_condition.as_ref().map(type_condition_name)
            }
        }
    }
}

pub fn type_condition_name<'b, 'a, T: Text<'a>>(
    type_condition: &'b TypeCondition<'a, T>,
) -> &'b str {
    match type_condition {
        TypeCondition::On(name) => name.as_ref(),
    }
}
