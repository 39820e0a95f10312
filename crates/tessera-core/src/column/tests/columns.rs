use crate::{
    column::{Column, Condition, tests::column},
    error::Error,
    type_key::TypeKey,
    types::AtomicLong,
};

#[test]
fn column_rejects_blank_names() {
    assert_eq!(
        Column::of("", "value").expect_err("empty name"),
        Error::NullArgument { argument: "name" }
    );
    assert_eq!(
        Column::of("   ", 1_i64).expect_err("blank name"),
        Error::NullArgument { argument: "name" }
    );
}

#[test]
fn column_equality_is_name_and_value() {
    assert_eq!(column("age", 26_i32), column("age", 26_i32));
    assert_ne!(column("age", 26_i32), column("years", 26_i32));
    assert_ne!(column("age", 26_i32), column("age", 27_i32));
}

#[test]
fn column_reads_through_registry() {
    let col = column("visits", "42");

    assert_eq!(col.get::<i64>().expect("numeric literal"), 42);
    assert_eq!(col.get::<AtomicLong>().expect("numeric literal"), AtomicLong::new(42));
    assert_eq!(
        col.get_as(&TypeKey::<Option<u8>>::new()).expect("optional"),
        Some(42)
    );
}

#[test]
fn column_into_parts_round_trips_name() {
    let (name, value) = column("city", "Salvador").into_parts();

    assert_eq!(name, "city");
    assert_eq!(value.get::<String>().expect("text"), "Salvador");
}

#[test]
fn condition_name_fields_are_canonical() {
    assert_eq!(Condition::And.name_field(), "_AND");
    assert_eq!(Condition::Or.name_field(), "_OR");
    assert_eq!(Condition::Not.name_field(), "_NOT");
    assert_eq!(Condition::Subquery.name_field(), "_SUBQUERY");
    assert_eq!(Condition::GreaterEqualsThan.to_string(), "GREATER_EQUALS_THAN");

    for condition in Condition::ALL {
        assert_eq!(
            Condition::from_name_field(condition.name_field()),
            Some(condition)
        );
    }
    assert_eq!(Condition::from_name_field("AND"), None);
}

#[test]
fn condition_serializes_as_upper_snake_case() {
    let json = serde_json::to_string(&Condition::LesserEqualsThan).expect("serialize");
    assert_eq!(json, "\"LESSER_EQUALS_THAN\"");

    let parsed: Condition = serde_json::from_str("\"SUBQUERY\"").expect("deserialize");
    assert_eq!(parsed, Condition::Subquery);
}
