use std::sync::Arc;

use pretty_assertions::assert_eq;

use crate::{
    config::SignatureConfig,
    error::SignatureError,
    processor::SignatureProcessor,
    tests::testkit::init_logger,
};

#[test]
fn processes_and_caches_signatures() -> Result<(), SignatureError> {
    init_logger();
    let processor = SignatureProcessor::default();
    let query = r#"query GetUser { user(id: "1") { b: name id } }"#;

    let first = processor.process(query, Some("GetUser"))?;
    assert_eq!(first.operation_name.as_deref(), Some("GetUser"));
    assert_eq!(first.signature, r#"query GetUser{user(id:""){id name}}"#);
    assert_eq!(
        first.hash,
        format!("{:x}", md5::compute(first.signature.as_bytes()))
    );
    assert_eq!(first.hash.len(), 32);

    let second = processor.process(query, Some("GetUser"))?;
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(processor.cached_entries(), 1);

    Ok(())
}

#[test]
fn operation_name_is_part_of_the_cache_key() -> Result<(), SignatureError> {
    init_logger();
    let processor = SignatureProcessor::default();
    let query = "query A { a } query B { b }";

    let a = processor.process(query, Some("A"))?;
    let b = processor.process(query, Some("B"))?;

    assert_eq!(a.signature, "query A{a}");
    assert_eq!(b.signature, "query B{b}");
    assert_ne!(a.hash, b.hash);
    assert_eq!(processor.cached_entries(), 2);

    Ok(())
}

#[test]
fn missing_operation_name_selects_anonymous_operation() -> Result<(), SignatureError> {
    init_logger();
    let processor = SignatureProcessor::new(&SignatureConfig::operation_registry(true));

    let signature = processor.process("{ me { n: name(short: true) } }", None)?;
    assert_eq!(signature.operation_name, None);
    assert_eq!(signature.signature, "{me{n:name(short:true)}}");

    Ok(())
}

#[test]
fn reports_parse_errors() {
    init_logger();
    let processor = SignatureProcessor::default();

    assert!(matches!(
        processor.process("query {", None),
        Err(SignatureError::ParseError(_))
    ));
    assert_eq!(processor.cached_entries(), 0);
}
