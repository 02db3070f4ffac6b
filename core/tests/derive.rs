use chrono::{NaiveDate, TimeDelta};
use serwrite::{EnumValue, Primitive};

#[derive(EnumValue, Clone, Copy)]
enum Weekday {
    Monday,
    Tuesday = 7,
    #[allow(non_camel_case_types)]
    wednesday_late,
}

#[derive(EnumValue)]
enum Unit {
    Only,
}

#[test]
fn test_enum_name() {
    assert_eq!(Weekday::Monday.name(), "Monday");
    assert_eq!(Weekday::wednesday_late.name(), "wednesday_late");
    assert_eq!(Unit::Only.name(), "Only");
}

#[test]
fn test_enum_name_ignores_discriminant() {
    assert_eq!(Weekday::Tuesday as i32, 7);
    assert_eq!(Weekday::Tuesday.name(), "Tuesday");
}

#[test]
fn test_enum_as_dyn() {
    let members: [&dyn EnumValue; 3] = [&Weekday::Monday, &Unit::Only, &"Custom"];
    let names: Vec<_> = members.iter().map(|member| member.name()).collect();
    assert_eq!(names, ["Monday", "Only", "Custom"]);
}

#[test]
fn test_primitive_from() {
    assert_eq!(Primitive::from("text"), Primitive::String("text".to_owned()));
    assert_eq!(Primitive::from(3i32), Primitive::Int(3));
    assert_eq!(Primitive::from(0.5f32), Primitive::Float(0.5));
    assert_eq!(Primitive::from(false), Primitive::Bool(false));
    assert_eq!(Primitive::from(None::<bool>), Primitive::Null);
    assert_eq!(Primitive::from(Some(9i64)), Primitive::Int(9));

    let date = NaiveDate::from_ymd_opt(2020, 5, 17).unwrap();
    assert_eq!(Primitive::from(date), Primitive::Date(date));
    let duration = TimeDelta::try_minutes(5).unwrap();
    assert_eq!(Primitive::from(duration), Primitive::Duration(duration));
}

#[derive(EnumValue)]
enum Annotated {
    /// The first member.
    #[allow(dead_code)]
    First,
    #[doc = "The second member."]
    Second,
}

#[test]
fn test_enum_name_with_variant_attributes() {
    assert_eq!(Annotated::Second.name(), "Second");
}

#[test]
fn test_primitive_naive_datetime() {
    let value = NaiveDate::from_ymd_opt(2020, 5, 17)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();
    assert_eq!(Primitive::from(value), Primitive::NaiveDateTime(value));
}
