use graphql_parser::query::{Document, Text, Value};
use once_cell::sync::Lazy;
use regex_automata::meta::Regex;
use tracing::trace;

use crate::ast::{walk_document, VisitFlow, VisitorMut};
use crate::error::SignatureError;

static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));
// a space following anything that is not part of a name
static SPACE_AFTER_PUNCTUATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^_a-zA-Z0-9] ").expect("Failed to compile space after punctuator regex")
});
// a space preceding anything that is not part of a name
static SPACE_BEFORE_PUNCTUATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r" [^_a-zA-Z0-9]").expect("Failed to compile space before punctuator regex")
});
static HEX_STRING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""[a-f0-9]+""#).expect("Failed to compile hex string literal regex")
});

/// Prints the document like the regular GraphQL printer does, but deletes
/// whitespace wherever feasible.
///
/// All whitespace outside of string literals is reduced to at most one space,
/// and even that space is removed anywhere except between two name characters.
/// String literals are printed as hex while whitespace is collapsed and restored
/// afterwards, so their content is never touched. This is why the document is
/// consumed: its string values are rewritten before printing.
pub fn print_compact<'a, T: Text<'a>>(
    mut document: Document<'a, T>,
) -> Result<String, SignatureError> {
    walk_document(&HexEncodeStrings, &mut document);

    let printed = document.to_string();
    trace!(length = printed.len(), "compacting printed document");

    compact_printed_document(&printed)
}

/// Text-level half of [`print_compact`]: collapses the whitespace of a printed
/// document whose string literals were hex encoded, then decodes them back.
pub fn compact_printed_document(printed: &str) -> Result<String, SignatureError> {
    let collapsed = replace_all(printed, &WHITESPACE_REGEX, |_, output| {
        output.push(' ');
        Ok(())
    })?;

    let collapsed = replace_all(&collapsed, &SPACE_AFTER_PUNCTUATOR_REGEX, |found, output| {
        // the space is a single byte at the end of the match
        output.push_str(&found[..found.len() - 1]);
        Ok(())
    })?;

    let collapsed = replace_all(&collapsed, &SPACE_BEFORE_PUNCTUATOR_REGEX, |found, output| {
        output.push_str(&found[1..]);
        Ok(())
    })?;

    replace_all(&collapsed, &HEX_STRING_REGEX, |found, output| {
        let bytes = hex::decode(&found[1..found.len() - 1])?;
        write_quoted(output, &String::from_utf8(bytes)?);
        Ok(())
    })
}

/// Replaces every non-overlapping match of `regex`, left to right, with what
/// `replace` writes for it.
fn replace_all<F>(haystack: &str, regex: &Regex, mut replace: F) -> Result<String, SignatureError>
where
    F: FnMut(&str, &mut String) -> Result<(), SignatureError>,
{
    let mut output = String::with_capacity(haystack.len());
    let mut last_end = 0;

    for found in regex.find_iter(haystack) {
        output.push_str(&haystack[last_end..found.start()]);
        replace(&haystack[found.range()], &mut output)?;
        last_end = found.end();
    }

    output.push_str(&haystack[last_end..]);

    Ok(output)
}

/// Writes `value` as a GraphQL string literal.
fn write_quoted(output: &mut String, value: &str) {
    output.push('"');

    for c in value.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => output.push_str(&format!("\\u{:04X}", c as u32)),
            c => output.push(c),
        }
    }

    output.push('"');
}

struct HexEncodeStrings;

impl<'a, T: Text<'a>> VisitorMut<'a, T> for HexEncodeStrings {
    fn enter_value(&self, value: &mut Value<'a, T>) -> VisitFlow {
        if let Value::String(string) = value {
            *string = hex::encode(string.as_bytes());
        }

        VisitFlow::Continue
    }
}
