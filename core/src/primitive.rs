use crate::{EnumValue, SerializationError, SerializationWriter};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use uuid::Uuid;

/// An owned primitive value whose type is only known at runtime, such as an element of a
/// collection or an entry of [`crate::AdditionalData`].
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Uuid(Uuid),
    DateTime(DateTime<FixedOffset>),
    NaiveDateTime(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
    Duration(TimeDelta),

    /// The symbolic name of an enum member.
    Enum(&'static str),
    Null,
}

/// Writes a [`Primitive`] using the typed method of [`SerializationWriter`] which corresponds
/// to its variant.
pub fn write_primitive<W: SerializationWriter + ?Sized>(
    writer: &mut W,
    key: Option<&str>,
    value: &Primitive,
) -> Result<(), SerializationError> {
    match value {
        Primitive::String(value) => writer.write_string(key, Some(value.as_str())),
        Primitive::Bool(value) => writer.write_bool(key, Some(*value)),
        Primitive::Int(value) => writer.write_int(key, Some(*value)),
        Primitive::Float(value) => writer.write_float(key, Some(*value)),
        Primitive::Uuid(value) => writer.write_uuid(key, Some(*value)),
        Primitive::DateTime(value) => writer.write_datetime(key, Some(*value)),
        Primitive::NaiveDateTime(value) => writer.write_naive_datetime(key, Some(*value)),
        Primitive::Date(value) => writer.write_date(key, Some(*value)),
        Primitive::Time(value) => writer.write_time(key, Some(*value)),
        Primitive::Duration(value) => writer.write_duration(key, Some(*value)),
        Primitive::Enum(name) => writer.write_enum(key, Some(name as &dyn EnumValue)),
        Primitive::Null => writer.write_null(key),
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Primitive::String(value)
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::String(value.to_owned())
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Primitive::Bool(value)
    }
}

impl From<i32> for Primitive {
    fn from(value: i32) -> Self {
        Primitive::Int(value.into())
    }
}

impl From<i64> for Primitive {
    fn from(value: i64) -> Self {
        Primitive::Int(value)
    }
}

impl From<f32> for Primitive {
    fn from(value: f32) -> Self {
        Primitive::Float(value.into())
    }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        Primitive::Float(value)
    }
}

impl From<Uuid> for Primitive {
    fn from(value: Uuid) -> Self {
        Primitive::Uuid(value)
    }
}

impl From<DateTime<FixedOffset>> for Primitive {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Primitive::DateTime(value)
    }
}

impl From<NaiveDateTime> for Primitive {
    fn from(value: NaiveDateTime) -> Self {
        Primitive::NaiveDateTime(value)
    }
}

impl From<NaiveDate> for Primitive {
    fn from(value: NaiveDate) -> Self {
        Primitive::Date(value)
    }
}

impl From<NaiveTime> for Primitive {
    fn from(value: NaiveTime) -> Self {
        Primitive::Time(value)
    }
}

impl From<TimeDelta> for Primitive {
    fn from(value: TimeDelta) -> Self {
        Primitive::Duration(value)
    }
}

impl<T: Into<Primitive>> From<Option<T>> for Primitive {
    fn from(value: Option<T>) -> Self {
        value.map_or(Primitive::Null, Into::into)
    }
}
