/// An error that can occur while writing a value with a [`crate::SerializationWriter`], or while
/// selecting a writer with a [`crate::SerializationWriterFactory`].
///
/// All of these describe incorrect use of a codec rather than a transient failure, so they are
/// never retried.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// The writer was asked to produce a key, collection, object or map, which its format
    /// cannot represent.
    #[error("{format} does not support structured data")]
    UnsupportedOperation {
        /// The name of the format which rejected the operation.
        format: &'static str,
    },

    /// A second value was written to a writer which can only hold one.
    #[error(
        "a value was already written for this serialization writer, \
        text content only supports a single value"
    )]
    DuplicateValue,

    /// A factory was asked for a writer without a content type.
    #[error("content type cannot be empty")]
    EmptyContentType,

    /// A factory was asked for a writer for a content type it does not handle.
    #[error("content type {actual:?} is not supported, expected {expected:?}")]
    InvalidContentType {
        actual: String,
        expected: String,
    },
}
