use crate::{EnumValue, ObjectHooks, Parsable, ParsableHook, Primitive, SerializationError};
use crate::StartObjectHook;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::io::Cursor;
use uuid::Uuid;

/// Extra properties of a model which are not described by its declared fields.
pub type AdditionalData = hashbrown::HashMap<String, Primitive>;

/// An interface for writing a model, or a single value, in some content type.
///
/// Every codec implements the full interface, including operations its format cannot represent.
/// Those return [`SerializationError::UnsupportedOperation`] so that callers can detect the
/// mismatch, rather than silently losing data.
///
/// Each write takes an optional `key`, naming the property being written. A `None` value is
/// absent, and writing it has no effect.
pub trait SerializationWriter {
    /// Writes the given string.
    fn write_string(
        &mut self,
        key: Option<&str>,
        value: Option<&str>,
    ) -> Result<(), SerializationError>;

    /// Writes the given [`bool`].
    fn write_bool(
        &mut self,
        key: Option<&str>,
        value: Option<bool>,
    ) -> Result<(), SerializationError>;

    /// Writes the given integer.
    fn write_int(
        &mut self,
        key: Option<&str>,
        value: Option<i64>,
    ) -> Result<(), SerializationError>;

    /// Writes the given floating-point number.
    fn write_float(
        &mut self,
        key: Option<&str>,
        value: Option<f64>,
    ) -> Result<(), SerializationError>;

    /// Writes the given [`Uuid`].
    fn write_uuid(
        &mut self,
        key: Option<&str>,
        value: Option<Uuid>,
    ) -> Result<(), SerializationError>;

    /// Writes the given date and time, including its offset from UTC.
    fn write_datetime(
        &mut self,
        key: Option<&str>,
        value: Option<DateTime<FixedOffset>>,
    ) -> Result<(), SerializationError>;

    /// Writes the given date and time, which has no offset from UTC.
    fn write_naive_datetime(
        &mut self,
        key: Option<&str>,
        value: Option<NaiveDateTime>,
    ) -> Result<(), SerializationError>;

    /// Writes the given calendar date.
    fn write_date(
        &mut self,
        key: Option<&str>,
        value: Option<NaiveDate>,
    ) -> Result<(), SerializationError>;

    /// Writes the given time of day.
    fn write_time(
        &mut self,
        key: Option<&str>,
        value: Option<NaiveTime>,
    ) -> Result<(), SerializationError>;

    /// Writes the given duration.
    fn write_duration(
        &mut self,
        key: Option<&str>,
        value: Option<TimeDelta>,
    ) -> Result<(), SerializationError>;

    /// Writes the given enum member.
    fn write_enum(
        &mut self,
        key: Option<&str>,
        value: Option<&dyn EnumValue>,
    ) -> Result<(), SerializationError>;

    /// Encodes the given byte array as base64. Depending on the codec, the encoded string is
    /// either written to the output, or returned to the caller.
    fn write_bytes(
        &mut self,
        key: Option<&str>,
        value: Option<&[u8]>,
    ) -> Result<Option<String>, SerializationError>;

    /// Writes an explicit `null`.
    fn write_null(&mut self, key: Option<&str>) -> Result<(), SerializationError>;

    /// Writes the given collection of primitive values.
    fn write_collection_of_primitives(
        &mut self,
        key: Option<&str>,
        values: Option<&[Primitive]>,
    ) -> Result<(), SerializationError>;

    /// Writes the given collection of models.
    fn write_collection_of_objects(
        &mut self,
        key: Option<&str>,
        values: Option<&[&dyn Parsable]>,
    ) -> Result<(), SerializationError>;

    /// Writes the given collection of enum members.
    fn write_collection_of_enums(
        &mut self,
        key: Option<&str>,
        values: Option<&[&dyn EnumValue]>,
    ) -> Result<(), SerializationError>;

    /// Writes the given model as a nested object.
    fn write_object(
        &mut self,
        key: Option<&str>,
        value: Option<&dyn Parsable>,
    ) -> Result<(), SerializationError>;

    /// Writes the additional data of a model into the object currently being written.
    fn write_additional_data(&mut self, value: &AdditionalData) -> Result<(), SerializationError>;

    /// Takes everything written so far as a UTF-8 encoded stream, positioned at its start. The
    /// writer is left empty, and may be used to write an unrelated value.
    fn finalize(&mut self) -> Cursor<Vec<u8>>;

    /// Gets the storage for the lifecycle callbacks of this writer.
    fn hooks(&self) -> &ObjectHooks;

    /// Gets mutable storage for the lifecycle callbacks of this writer.
    fn hooks_mut(&mut self) -> &mut ObjectHooks;

    /// Gets the callback called before a model is written.
    fn on_before_object_serialization(&self) -> Option<&ParsableHook> {
        self.hooks().before.as_ref()
    }

    /// Sets the callback called before a model is written.
    fn set_on_before_object_serialization(&mut self, hook: Option<ParsableHook>) {
        self.hooks_mut().before = hook;
    }

    /// Gets the callback called after a model is written.
    fn on_after_object_serialization(&self) -> Option<&ParsableHook> {
        self.hooks().after.as_ref()
    }

    /// Sets the callback called after a model is written.
    fn set_on_after_object_serialization(&mut self, hook: Option<ParsableHook>) {
        self.hooks_mut().after = hook;
    }

    /// Gets the callback called right after writing of a model starts.
    fn on_start_object_serialization(&self) -> Option<&StartObjectHook> {
        self.hooks().start.as_ref()
    }

    /// Sets the callback called right after writing of a model starts.
    fn set_on_start_object_serialization(&mut self, hook: Option<StartObjectHook>) {
        self.hooks_mut().start = hook;
    }
}

impl<W: SerializationWriter + ?Sized> SerializationWriter for &'_ mut W {
    fn write_string(
        &mut self,
        key: Option<&str>,
        value: Option<&str>,
    ) -> Result<(), SerializationError> {
        (**self).write_string(key, value)
    }

    fn write_bool(
        &mut self,
        key: Option<&str>,
        value: Option<bool>,
    ) -> Result<(), SerializationError> {
        (**self).write_bool(key, value)
    }

    fn write_int(
        &mut self,
        key: Option<&str>,
        value: Option<i64>,
    ) -> Result<(), SerializationError> {
        (**self).write_int(key, value)
    }

    fn write_float(
        &mut self,
        key: Option<&str>,
        value: Option<f64>,
    ) -> Result<(), SerializationError> {
        (**self).write_float(key, value)
    }

    fn write_uuid(
        &mut self,
        key: Option<&str>,
        value: Option<Uuid>,
    ) -> Result<(), SerializationError> {
        (**self).write_uuid(key, value)
    }

    fn write_datetime(
        &mut self,
        key: Option<&str>,
        value: Option<DateTime<FixedOffset>>,
    ) -> Result<(), SerializationError> {
        (**self).write_datetime(key, value)
    }

    fn write_naive_datetime(
        &mut self,
        key: Option<&str>,
        value: Option<NaiveDateTime>,
    ) -> Result<(), SerializationError> {
        (**self).write_naive_datetime(key, value)
    }

    fn write_date(
        &mut self,
        key: Option<&str>,
        value: Option<NaiveDate>,
    ) -> Result<(), SerializationError> {
        (**self).write_date(key, value)
    }

    fn write_time(
        &mut self,
        key: Option<&str>,
        value: Option<NaiveTime>,
    ) -> Result<(), SerializationError> {
        (**self).write_time(key, value)
    }

    fn write_duration(
        &mut self,
        key: Option<&str>,
        value: Option<TimeDelta>,
    ) -> Result<(), SerializationError> {
        (**self).write_duration(key, value)
    }

    fn write_enum(
        &mut self,
        key: Option<&str>,
        value: Option<&dyn EnumValue>,
    ) -> Result<(), SerializationError> {
        (**self).write_enum(key, value)
    }

    fn write_bytes(
        &mut self,
        key: Option<&str>,
        value: Option<&[u8]>,
    ) -> Result<Option<String>, SerializationError> {
        (**self).write_bytes(key, value)
    }

    fn write_null(&mut self, key: Option<&str>) -> Result<(), SerializationError> {
        (**self).write_null(key)
    }

    fn write_collection_of_primitives(
        &mut self,
        key: Option<&str>,
        values: Option<&[Primitive]>,
    ) -> Result<(), SerializationError> {
        (**self).write_collection_of_primitives(key, values)
    }

    fn write_collection_of_objects(
        &mut self,
        key: Option<&str>,
        values: Option<&[&dyn Parsable]>,
    ) -> Result<(), SerializationError> {
        (**self).write_collection_of_objects(key, values)
    }

    fn write_collection_of_enums(
        &mut self,
        key: Option<&str>,
        values: Option<&[&dyn EnumValue]>,
    ) -> Result<(), SerializationError> {
        (**self).write_collection_of_enums(key, values)
    }

    fn write_object(
        &mut self,
        key: Option<&str>,
        value: Option<&dyn Parsable>,
    ) -> Result<(), SerializationError> {
        (**self).write_object(key, value)
    }

    fn write_additional_data(&mut self, value: &AdditionalData) -> Result<(), SerializationError> {
        (**self).write_additional_data(value)
    }

    fn finalize(&mut self) -> Cursor<Vec<u8>> {
        (**self).finalize()
    }

    fn hooks(&self) -> &ObjectHooks {
        (**self).hooks()
    }

    fn hooks_mut(&mut self) -> &mut ObjectHooks {
        (**self).hooks_mut()
    }
}
