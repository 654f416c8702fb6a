use graphql_parser::query::{
    Definition, Directive, Document, Field, FragmentDefinition, FragmentSpread, InlineFragment,
    OperationDefinition, Selection, SelectionSet, Text, Value, VariableDefinition,
};

/// What the walker does after a value hook returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitFlow {
    Continue,
    /// Leaves the items of a list, or the fields of an object, unvisited.
    SkipChildren,
}

/// A trait for implementing an in-place transformation of a GraphQL operation document.
///
/// Every hook receives the node before its children are walked, so a hook may
/// reorder or clear child collections and the walker follows the result.
/// Hooks take `&self`: visitors are expected to be stateless (or to carry
/// immutable configuration only), which makes a single instance safe to share
/// between threads.
pub trait VisitorMut<'a, T: Text<'a>> {
    fn enter_document(&self, _document: &mut Document<'a, T>) {}

    fn enter_operation(&self, _operation: &mut OperationDefinition<'a, T>) {}

    fn enter_fragment_definition(&self, _fragment: &mut FragmentDefinition<'a, T>) {}

    fn enter_variable_definition(&self, _variable_definition: &mut VariableDefinition<'a, T>) {}

    fn enter_selection_set(&self, _selection_set: &mut SelectionSet<'a, T>) {}

    fn enter_field(&self, _field: &mut Field<'a, T>) {}

    fn enter_fragment_spread(&self, _fragment_spread: &mut FragmentSpread<'a, T>) {}

    fn enter_inline_fragment(&self, _inline_fragment: &mut InlineFragment<'a, T>) {}

    fn enter_directive(&self, _directive: &mut Directive<'a, T>) {}

    fn enter_value(&self, _value: &mut Value<'a, T>) -> VisitFlow {
        VisitFlow::Continue
    }
}

/// Walks the whole document, pre-order, visiting every node exactly once.
pub fn walk_document<'a, T, V>(visitor: &V, document: &mut Document<'a, T>)
where
    T: Text<'a>,
    V: VisitorMut<'a, T> + ?Sized,
{
    visitor.enter_document(document);

    for definition in document.definitions.iter_mut() {
        match definition {
            Definition::Operation(operation) => walk_operation(visitor, operation),
            Definition::Fragment(fragment) => walk_fragment_definition(visitor, fragment),
        }
    }
}

fn walk_operation<'a, T, V>(visitor: &V, operation: &mut OperationDefinition<'a, T>)
where
    T: Text<'a>,
    V: VisitorMut<'a, T> + ?Sized,
{
    visitor.enter_operation(operation);

    match operation {
        OperationDefinition::SelectionSet(selection_set) => {
            walk_selection_set(visitor, selection_set);
        }
        OperationDefinition::Query(query) => {
            walk_variable_definitions(visitor, &mut query.variable_definitions);
            walk_directives(visitor, &mut query.directives);
            walk_selection_set(visitor, &mut query.selection_set);
        }
        OperationDefinition::Mutation(mutation) => {
            walk_variable_definitions(visitor, &mut mutation.variable_definitions);
            walk_directives(visitor, &mut mutation.directives);
            walk_selection_set(visitor, &mut mutation.selection_set);
        }
        OperationDefinition::Subscription(subscription) => {
            walk_variable_definitions(visitor, &mut subscription.variable_definitions);
            walk_directives(visitor, &mut subscription.directives);
            walk_selection_set(visitor, &mut subscription.selection_set);
        }
    }
}

fn walk_fragment_definition<'a, T, V>(visitor: &V, fragment: &mut FragmentDefinition<'a, T>)
where
    T: Text<'a>,
    V: VisitorMut<'a, T> + ?Sized,
{
    visitor.enter_fragment_definition(fragment);
    walk_directives(visitor, &mut fragment.directives);
    walk_selection_set(visitor, &mut fragment.selection_set);
}

fn walk_variable_definitions<'a, T, V>(
    visitor: &V,
    variable_definitions: &mut [VariableDefinition<'a, T>],
) where
    T: Text<'a>,
    V: VisitorMut<'a, T> + ?Sized,
{
    for variable_definition in variable_definitions.iter_mut() {
        visitor.enter_variable_definition(variable_definition);

        if let Some(default_value) = variable_definition.default_value.as_mut() {
            walk_value(visitor, default_value);
        }
    }
}

fn walk_selection_set<'a, T, V>(visitor: &V, selection_set: &mut SelectionSet<'a, T>)
where
    T: Text<'a>,
    V: VisitorMut<'a, T> + ?Sized,
{
    visitor.enter_selection_set(selection_set);

    for selection in selection_set.items.iter_mut() {
        match selection {
            Selection::Field(field) => {
                visitor.enter_field(field);
                walk_arguments(visitor, &mut field.arguments);
                walk_directives(visitor, &mut field.directives);
                walk_selection_set(visitor, &mut field.selection_set);
            }
            Selection::FragmentSpread(fragment_spread) => {
                visitor.enter_fragment_spread(fragment_spread);
                walk_directives(visitor, &mut fragment_spread.directives);
            }
            Selection::InlineFragment(inline_fragment) => {
                visitor.enter_inline_fragment(inline_fragment);
                walk_directives(visitor, &mut inline_fragment.directives);
                walk_selection_set(visitor, &mut inline_fragment.selection_set);
            }
        }
    }
}

fn walk_directives<'a, T, V>(visitor: &V, directives: &mut [Directive<'a, T>])
where
    T: Text<'a>,
    V: VisitorMut<'a, T> + ?Sized,
{
    for directive in directives.iter_mut() {
        visitor.enter_directive(directive);
        walk_arguments(visitor, &mut directive.arguments);
    }
}

fn walk_arguments<'a, T, V>(visitor: &V, arguments: &mut [(T::Value, Value<'a, T>)])
where
    T: Text<'a>,
    V: VisitorMut<'a, T> + ?Sized,
{
    for (_, value) in arguments.iter_mut() {
        walk_value(visitor, value);
    }
}

fn walk_value<'a, T, V>(visitor: &V, value: &mut Value<'a, T>)
where
    T: Text<'a>,
    V: VisitorMut<'a, T> + ?Sized,
{
    if visitor.enter_value(value) == VisitFlow::SkipChildren {
        return;
    }

    match value {
        Value::List(items) => {
            for item in items.iter_mut() {
                walk_value(visitor, item);
            }
        }
        Value::Object(fields) => {
            for field_value in fields.values_mut() {
                walk_value(visitor, field_value);
            }
        }
        Value::Variable(_)
        | Value::Int(_)
        | Value::Float(_)
        | Value::String(_)
        | Value::Boolean(_)
        | Value::Null
        | Value::Enum(_) => {}
    }
}
