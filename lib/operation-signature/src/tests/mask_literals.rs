use pretty_assertions::assert_eq;

use crate::{
    pipeline::{mask_literals, mask_string_and_numeric_literals},
    tests::testkit::{init_logger, parse_operation},
};

#[test]
fn masks_all_literals() {
    init_logger();
    let document = parse_operation(r#"query { f(n: 42, s: "secret", l: [1,2], o: {k: 1}) }"#);

    insta::assert_snapshot!(mask_literals(document).to_string(), @r#"
    query {
      f(n: 0, s: "", l: [], o: {})
    }
    "#);
}

#[test]
fn masks_only_string_and_numeric_literals() {
    init_logger();
    let document = parse_operation(r#"query { f(n: 42, s: "secret", l: [1,2], o: {k: 1}) }"#);

    insta::assert_snapshot!(mask_string_and_numeric_literals(document).to_string(), @r#"
    query {
      f(n: 0, s: "", l: [1, 2], o: {k: 1})
    }
    "#);
}

#[test]
fn keeps_enums_booleans_nulls_and_variables() {
    init_logger();
    let document = parse_operation(
        r#"
        query Q($v: Int) {
          f(e: RED, b: true, n: null, v: $v, x: 1.5)
        }"#,
    );

    insta::assert_snapshot!(mask_literals(document).to_string(), @r#"
    query Q($v: Int) {
      f(e: RED, b: true, n: null, v: $v, x: 0)
    }
    "#);
}

#[test]
fn masks_variable_defaults_and_directive_arguments() {
    init_logger();
    let document = parse_operation(
        r#"
        query Q($a: Int = 5, $s: String = "x") {
          f(a: $a) @custom(limit: 10, tag: "beta") {
            g
          }
        }"#,
    );

    insta::assert_snapshot!(mask_literals(document).to_string(), @r#"
    query Q($a: Int = 0, $s: String = "") {
      f(a: $a) @custom(limit: 0, tag: "") {
        g
      }
    }
    "#);
}

#[test]
fn masks_nested_selections_and_fragments() {
    init_logger();
    let document = parse_operation(
        r#"
        query {
          user(id: "u1") {
            ... on Admin {
              audit(days: 30)
            }
            ...Posts
          }
        }

        fragment Posts on User {
          posts(first: 10, after: "cursor")
        }"#,
    );

    insta::assert_snapshot!(mask_literals(document).to_string(), @r#"
    query {
      user(id: "") {
        ... on Admin {
          audit(days: 0)
        }
        ...Posts
      }
    }

    fragment Posts on User {
      posts(first: 0, after: "")
    }
    "#);
}

#[test]
fn masking_is_idempotent() {
    init_logger();
    let query = r#"query { f(n: 42, s: "secret", l: [1,2], o: {k: 1}, e: RED) }"#;

    let once = mask_literals(parse_operation(query)).to_string();
    let twice = mask_literals(mask_literals(parse_operation(query))).to_string();
    assert_eq!(once, twice);

    let once = mask_string_and_numeric_literals(parse_operation(query)).to_string();
    let twice =
        mask_string_and_numeric_literals(mask_string_and_numeric_literals(parse_operation(query)))
            .to_string();
    assert_eq!(once, twice);
}
