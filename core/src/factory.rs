use crate::{SerializationError, SerializationWriter};

/// Creates [`SerializationWriter`]s for one content type.
pub trait SerializationWriterFactory {
    /// Gets the content type handled by this factory, e.g. `text/plain`.
    fn valid_content_type(&self) -> &str;

    /// Creates a new, empty writer for the given content type. Fails if the content type is
    /// empty, or is not [`SerializationWriterFactory::valid_content_type`].
    fn get_serialization_writer(
        &self,
        content_type: &str,
    ) -> Result<Box<dyn SerializationWriter>, SerializationError>;
}

/// Checks that the given content type is the one accepted by a factory. Media type parameters
/// (anything after `;`) are ignored, and the comparison is case-insensitive.
pub fn check_content_type(content_type: &str, valid: &str) -> Result<(), SerializationError> {
    if content_type.trim().is_empty() {
        return Err(SerializationError::EmptyContentType);
    }
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    if essence.eq_ignore_ascii_case(valid) {
        Ok(())
    } else {
        Err(SerializationError::InvalidContentType {
            actual: content_type.to_owned(),
            expected: valid.to_owned(),
        })
    }
}
