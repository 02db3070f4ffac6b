use crate::TextWriter;
use serwrite::{check_content_type, SerializationError};
use serwrite::{SerializationWriter, SerializationWriterFactory};
use std::borrow::Cow;

/// The content type handled by a default [`TextWriterFactory`].
pub const TEXT_CONTENT_TYPE: &str = "text/plain";

/// A [`SerializationWriterFactory`] which creates [`TextWriter`]s.
#[derive(Debug, Clone)]
pub struct TextWriterFactory {
    content_type: Cow<'static, str>,
}

impl Default for TextWriterFactory {
    fn default() -> Self {
        Self {
            content_type: Cow::Borrowed(TEXT_CONTENT_TYPE),
        }
    }
}

impl TextWriterFactory {
    /// Constructs a [`TextWriterFactory`] for [`TEXT_CONTENT_TYPE`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a [`TextWriterFactory`] for a different textual content type, such as a
    /// vendor-specific one.
    pub fn with_content_type(content_type: impl Into<Cow<'static, str>>) -> Self {
        Self {
            content_type: content_type.into(),
        }
    }
}

impl SerializationWriterFactory for TextWriterFactory {
    fn valid_content_type(&self) -> &str {
        &self.content_type
    }

    fn get_serialization_writer(
        &self,
        content_type: &str,
    ) -> Result<Box<dyn SerializationWriter>, SerializationError> {
        check_content_type(content_type, &self.content_type)?;
        Ok(Box::new(TextWriter::new()))
    }
}
