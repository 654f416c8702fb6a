use pretty_assertions::assert_eq;

use crate::{
    error::SignatureError,
    pipeline::canonical_sort,
    printer::print_compact,
    tests::testkit::{init_logger, parse_operation},
};

#[test]
fn sorts_everything_by_kind_and_name() {
    init_logger();
    let document = parse_operation(
        r#"
        query Q($b: Int, $a: String) @z @a {
          zeta(y: 1, x: 2) @skip(if: false) @include(if: true)
          ... on User @b @a {
            name
          }
          ...Frag @b @a
          alpha
          ... {
            anon
          }
        }

        fragment Frag on Query @b @a {
          b
          a
        }"#,
    );

    insta::assert_snapshot!(canonical_sort(document).to_string(), @r#"
    fragment Frag on Query @a @b {
      a
      b
    }

    query Q($a: String, $b: Int) @z @a {
      alpha
      zeta(x: 2, y: 1) @skip(if: false) @include(if: true)
      ...Frag @a @b
      ... {
        anon
      }
      ... on User @a @b {
        name
      }
    }
    "#);
}

#[test]
fn keeps_operation_and_field_directives_in_source_order() -> Result<(), SignatureError> {
    init_logger();
    let document = parse_operation("query Q @b @a { f @skip(if: false) @include(if: true) }");

    assert_eq!(
        print_compact(canonical_sort(document))?,
        "query Q@b@a{f@skip(if:false)@include(if:true)}"
    );

    Ok(())
}

#[test]
fn anonymous_operations_come_first() {
    init_logger();
    let document = parse_operation(
        r#"
        query B {
          b
        }

        {
          anonymous
        }

        query A {
          a
        }"#,
    );

    insta::assert_snapshot!(canonical_sort(document).to_string(), @r#"
    {
      anonymous
    }

    query A {
      a
    }

    query B {
      b
    }
    "#);
}

#[test]
fn sorts_directive_arguments_and_keeps_equal_siblings_in_order() {
    init_logger();
    let document = parse_operation(
        r#"
        {
          picture(size: 100) @resize(width: 10, height: 20)
          picture(size: 10)
          ...F @defer(label: "f", if: true)
        }"#,
    );

    insta::assert_snapshot!(canonical_sort(document).to_string(), @r#"
    {
      picture(size: 100) @resize(height: 20, width: 10)
      picture(size: 10)
      ...F @defer(if: true, label: "f")
    }
    "#);
}

#[test]
fn ordering_of_input_does_not_matter() {
    init_logger();
    let first = parse_operation(
        r#"
        query Q($a: Int, $b: Int) {
          user(id: 1, name: "x") {
            ...Parts
            age
            name
          }
        }

        fragment Parts on User {
          email
          id
        }"#,
    );
    let second = parse_operation(
        r#"
        fragment Parts on User {
          id
          email
        }

        query Q($b: Int, $a: Int) {
          user(name: "x", id: 1) {
            name
            ...Parts
            age
          }
        }"#,
    );

    // positions differ between the two sources, so compare the printed form
    assert_eq!(
        canonical_sort(first).to_string(),
        canonical_sort(second).to_string()
    );
}

#[test]
fn sorting_is_idempotent() {
    init_logger();
    let query = r#"
        query Q($b: Int, $a: String) @z @a {
          b(y: 1, x: 2) { d c }
          ... on B { y }
          ... on A { x }
          a
        }"#;

    let once = canonical_sort(parse_operation(query));
    let twice = canonical_sort(canonical_sort(parse_operation(query)));
    assert_eq!(once, twice);
}
