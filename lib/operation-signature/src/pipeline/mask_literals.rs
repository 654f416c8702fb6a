use graphql_parser::query::{Document, Number, Text, Value};
use tracing::trace;

use crate::ast::{walk_document, VisitFlow, VisitorMut};

/// Replaces numeric, string, list and object literals with "empty" values.
///
/// Enums are left alone, there is no consistent "zero" enum. Booleans, nulls
/// and variables are not literals worth hiding and are kept as well.
pub fn mask_literals<'a, T: Text<'a>>(mut document: Document<'a, T>) -> Document<'a, T> {
    mask_literals_mut(&mut document);
    document
}

/// Same as [`mask_literals`], but only hides string and numeric literals.
/// Lists and objects are kept exactly as written, including their items.
pub fn mask_string_and_numeric_literals<'a, T: Text<'a>>(
    mut document: Document<'a, T>,
) -> Document<'a, T> {
    mask_string_and_numeric_literals_mut(&mut document);
    document
}

pub fn mask_literals_mut<'a, T: Text<'a>>(document: &mut Document<'a, T>) {
    trace!("masking all literals");
    walk_document(
        &MaskLiterals {
            only_string_and_numeric: false,
        },
        document,
    );
}

pub fn mask_string_and_numeric_literals_mut<'a, T: Text<'a>>(document: &mut Document<'a, T>) {
    trace!("masking string and numeric literals");
    walk_document(
        &MaskLiterals {
            only_string_and_numeric: true,
        },
        document,
    );
}

struct MaskLiterals {
    only_string_and_numeric: bool,
}

impl<'a, T: Text<'a>> VisitorMut<'a, T> for MaskLiterals {
    fn enter_value(&self, value: &mut Value<'a, T>) -> VisitFlow {
        match value {
            Value::Int(number) => {
                *number = Number::from(0);
            }
            Value::Float(number) => {
                *number = 0.0;
            }
            Value::String(string) => {
                string.clear();
            }
            Value::List(_) | Value::Object(_) if self.only_string_and_numeric => {
                return VisitFlow::SkipChildren;
            }
            Value::List(items) => {
                items.clear();
            }
            Value::Object(fields) => {
                fields.clear();
            }
            Value::Variable(_) | Value::Boolean(_) | Value::Null | Value::Enum(_) => (),
        }

        VisitFlow::Continue
    }
}
