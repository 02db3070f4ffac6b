use crate::format;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serwrite::{AdditionalData, EnumValue, ObjectHooks, Parsable, Primitive};
use serwrite::{SerializationError, SerializationWriter};
use std::io::Cursor;
use uuid::Uuid;

/// The name this writer reports in [`SerializationError::UnsupportedOperation`].
const FORMAT_NAME: &str = "text";

/// A [`SerializationWriter`] for plain text content, which consists of exactly one unkeyed
/// scalar value.
///
/// Scalars are converted to their canonical text form (see [`crate::format`]) and buffered until
/// [`SerializationWriter::finalize`] is called. Keys, collections, objects and additional data
/// are rejected with [`SerializationError::UnsupportedOperation`], and writing a second value
/// is rejected with [`SerializationError::DuplicateValue`].
///
/// The lifecycle hooks are stored but never called, since text content never contains a
/// nested object.
#[derive(Debug, Default)]
pub struct TextWriter {
    buffer: Vec<String>,
    hooks: ObjectHooks,
}

impl TextWriter {
    /// Constructs a new, empty [`TextWriter`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Indicates whether no value has been written since construction or the last
    /// [`SerializationWriter::finalize`].
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Closes the writer and returns the text written to it.
    pub fn into_string(self) -> String {
        self.buffer.concat()
    }

    /// Builds the error for an operation which requires structured data.
    fn unsupported(&self, operation: &'static str, key: Option<&str>) -> SerializationError {
        tracing::debug!(operation, ?key, "rejected structured write to text content");
        SerializationError::UnsupportedOperation {
            format: FORMAT_NAME,
        }
    }

    /// Writes the text form of a present scalar value, or does nothing for an absent one.
    fn write_text<T>(
        &mut self,
        key: Option<&str>,
        value: Option<T>,
        text: impl FnOnce(T) -> String,
    ) -> Result<(), SerializationError> {
        match value {
            Some(value) => {
                let text = text(value);
                self.write_string(key, Some(text.as_str()))
            }
            None => Ok(()),
        }
    }
}

/// Indicates whether the given key names a property.
fn is_keyed(key: Option<&str>) -> bool {
    key.is_some_and(|key| !key.is_empty())
}

impl SerializationWriter for TextWriter {
    fn write_string(
        &mut self,
        key: Option<&str>,
        value: Option<&str>,
    ) -> Result<(), SerializationError> {
        if is_keyed(key) {
            return Err(self.unsupported("write_string", key));
        }
        let Some(value) = value.filter(|value| !value.is_empty()) else {
            return Ok(());
        };
        if !self.buffer.is_empty() {
            tracing::debug!("rejected second value written to text content");
            return Err(SerializationError::DuplicateValue);
        }
        tracing::trace!(len = value.len(), "buffered text value");
        self.buffer.push(value.to_owned());
        Ok(())
    }

    fn write_bool(
        &mut self,
        key: Option<&str>,
        value: Option<bool>,
    ) -> Result<(), SerializationError> {
        self.write_text(key, value, |value| format::bool_text(value).to_owned())
    }

    fn write_int(
        &mut self,
        key: Option<&str>,
        value: Option<i64>,
    ) -> Result<(), SerializationError> {
        self.write_text(key, value, format::int_text)
    }

    fn write_float(
        &mut self,
        key: Option<&str>,
        value: Option<f64>,
    ) -> Result<(), SerializationError> {
        self.write_text(key, value, format::float_text)
    }

    fn write_uuid(
        &mut self,
        key: Option<&str>,
        value: Option<Uuid>,
    ) -> Result<(), SerializationError> {
        self.write_text(key, value, format::uuid_text)
    }

    fn write_datetime(
        &mut self,
        key: Option<&str>,
        value: Option<DateTime<FixedOffset>>,
    ) -> Result<(), SerializationError> {
        self.write_text(key, value, format::datetime_text)
    }

    fn write_naive_datetime(
        &mut self,
        key: Option<&str>,
        value: Option<NaiveDateTime>,
    ) -> Result<(), SerializationError> {
        self.write_text(key, value, format::naive_datetime_text)
    }

    fn write_date(
        &mut self,
        key: Option<&str>,
        value: Option<NaiveDate>,
    ) -> Result<(), SerializationError> {
        self.write_text(key, value, format::date_text)
    }

    fn write_time(
        &mut self,
        key: Option<&str>,
        value: Option<NaiveTime>,
    ) -> Result<(), SerializationError> {
        self.write_text(key, value, format::time_text)
    }

    fn write_duration(
        &mut self,
        key: Option<&str>,
        value: Option<TimeDelta>,
    ) -> Result<(), SerializationError> {
        self.write_text(key, value, format::duration_text)
    }

    fn write_enum(
        &mut self,
        key: Option<&str>,
        value: Option<&dyn EnumValue>,
    ) -> Result<(), SerializationError> {
        match value {
            Some(value) => self.write_string(key, Some(format::enum_text(value))),
            None => Ok(()),
        }
    }

    /// Unlike the other scalar writes, the encoded bytes are returned to the caller rather than
    /// buffered, and nothing is added to the output.
    fn write_bytes(
        &mut self,
        key: Option<&str>,
        value: Option<&[u8]>,
    ) -> Result<Option<String>, SerializationError> {
        match value.filter(|value| !value.is_empty()) {
            Some(_) if is_keyed(key) => Err(self.unsupported("write_bytes", key)),
            Some(value) => Ok(Some(format::bytes_text(value))),
            None => Ok(None),
        }
    }

    fn write_null(&mut self, key: Option<&str>) -> Result<(), SerializationError> {
        self.write_string(key, Some("null"))
    }

    fn write_collection_of_primitives(
        &mut self,
        key: Option<&str>,
        _: Option<&[Primitive]>,
    ) -> Result<(), SerializationError> {
        Err(self.unsupported("write_collection_of_primitives", key))
    }

    fn write_collection_of_objects(
        &mut self,
        key: Option<&str>,
        _: Option<&[&dyn Parsable]>,
    ) -> Result<(), SerializationError> {
        Err(self.unsupported("write_collection_of_objects", key))
    }

    fn write_collection_of_enums(
        &mut self,
        key: Option<&str>,
        _: Option<&[&dyn EnumValue]>,
    ) -> Result<(), SerializationError> {
        Err(self.unsupported("write_collection_of_enums", key))
    }

    fn write_object(
        &mut self,
        key: Option<&str>,
        _: Option<&dyn Parsable>,
    ) -> Result<(), SerializationError> {
        Err(self.unsupported("write_object", key))
    }

    fn write_additional_data(&mut self, _: &AdditionalData) -> Result<(), SerializationError> {
        Err(self.unsupported("write_additional_data", None))
    }

    fn finalize(&mut self) -> Cursor<Vec<u8>> {
        let text = std::mem::take(&mut self.buffer).concat();
        tracing::trace!(len = text.len(), "finalized text content");
        Cursor::new(text.into_bytes())
    }

    fn hooks(&self) -> &ObjectHooks {
        &self.hooks
    }

    fn hooks_mut(&mut self) -> &mut ObjectHooks {
        &mut self.hooks
    }
}
