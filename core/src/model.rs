use crate::{SerializationError, SerializationWriter};

/// A model type which can describe itself to any [`SerializationWriter`].
///
/// Implementations are typically generated alongside request builders. A model writes each of
/// its properties with the typed `write_*` methods, so the same implementation works for
/// every codec.
pub trait Parsable {
    /// Writes the properties of this model to the given writer.
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError>;
}

impl<T: Parsable + ?Sized> Parsable for &'_ T {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        (**self).serialize(writer)
    }
}

/// An enum whose members are written by their symbolic name.
///
/// This can be derived for fieldless enums with `#[derive(EnumValue)]`.
pub trait EnumValue {
    /// Gets the symbolic name of this member, exactly as it appears in the enum declaration.
    fn name(&self) -> &'static str;
}

impl EnumValue for &'static str {
    fn name(&self) -> &'static str {
        *self
    }
}
