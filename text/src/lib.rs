mod factory;
pub mod format;
mod writer;

pub use factory::*;
pub use writer::*;
use serwrite::{write_primitive, Primitive, SerializationError};

/// Writes a single primitive value as plain text, returning its UTF-8 encoding.
pub fn to_vec(value: impl Into<Primitive>) -> Result<Vec<u8>, SerializationError> {
    let mut writer = TextWriter::new();
    write_primitive(&mut writer, None, &value.into())?;
    Ok(writer.into_string().into_bytes())
}

/// Writes a single primitive value as plain text.
pub fn to_string(value: impl Into<Primitive>) -> Result<String, SerializationError> {
    let mut writer = TextWriter::new();
    write_primitive(&mut writer, None, &value.into())?;
    Ok(writer.into_string())
}
