use serwrite::{SerializationError, SerializationWriterFactory};
use serwrite_text::{TextWriterFactory, TEXT_CONTENT_TYPE};

#[test]
fn test_valid_content_type() {
    let factory = TextWriterFactory::new();
    assert_eq!(factory.valid_content_type(), TEXT_CONTENT_TYPE);
    assert_eq!(factory.valid_content_type(), "text/plain");
}

#[test]
fn test_get_writer() {
    let factory = TextWriterFactory::default();
    for content_type in ["text/plain", "Text/Plain", "text/plain; charset=utf-8"] {
        let mut writer = factory.get_serialization_writer(content_type).unwrap();
        writer.write_string(None, Some("ok")).unwrap();
        assert_eq!(writer.finalize().into_inner(), b"ok");
    }
}

#[test]
fn test_writers_are_independent() {
    let factory = TextWriterFactory::new();
    let mut a = factory.get_serialization_writer("text/plain").unwrap();
    let mut b = factory.get_serialization_writer("text/plain").unwrap();
    a.write_string(None, Some("a")).unwrap();
    b.write_string(None, Some("b")).unwrap();
    assert_eq!(a.finalize().into_inner(), b"a");
    assert_eq!(b.finalize().into_inner(), b"b");
}

#[test]
fn test_rejected_content_types() {
    let factory = TextWriterFactory::new();
    assert_eq!(
        factory.get_serialization_writer("").err(),
        Some(SerializationError::EmptyContentType)
    );
    assert_eq!(
        factory.get_serialization_writer("  ").err(),
        Some(SerializationError::EmptyContentType)
    );
    assert_eq!(
        factory.get_serialization_writer("application/json").err(),
        Some(SerializationError::InvalidContentType {
            actual: "application/json".to_owned(),
            expected: "text/plain".to_owned(),
        })
    );
}

#[test]
fn test_custom_content_type() {
    let factory = TextWriterFactory::with_content_type("text/vnd.example");
    assert_eq!(factory.valid_content_type(), "text/vnd.example");
    assert!(factory.get_serialization_writer("text/vnd.example").is_ok());
    assert!(factory.get_serialization_writer("text/plain").is_err());
}
