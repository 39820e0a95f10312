use super::convert;
use crate::{
    error::Error,
    reader::{
        MapTypeKeyReader, OptionalTypeKeyReader, SequenceTypeKeyReader, TypeKeyReader,
        standard_key_readers,
    },
    type_key::{RawType, Reify, TypeDescriptor, TypeShape},
    types::Null,
};
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

#[test]
fn optional_reader_accepts_only_parameterized_optionals() {
    let reader = OptionalTypeKeyReader;

    assert!(reader.is_compatible(&Option::<String>::descriptor()));
    assert!(reader.is_compatible(&Option::<i64>::descriptor()));
    assert!(reader.is_compatible(&Option::<Vec<String>>::descriptor()));

    assert!(!reader.is_compatible(&Vec::<f64>::descriptor()));
    assert!(!reader.is_compatible(&String::descriptor()));
    assert!(!reader.is_compatible(&BTreeSet::<String>::descriptor()));
    assert!(!reader.is_compatible(&Vec::<Vec<String>>::descriptor()));
    assert!(!reader.is_compatible(&VecDeque::<String>::descriptor()));
    assert!(!reader.is_compatible(&BTreeMap::<i32, String>::descriptor()));
    assert!(!reader.is_compatible(&TypeDescriptor::erased(
        TypeShape::Optional,
        RawType::of::<Option<String>>()
    )));
}

#[test]
fn optional_reader_wraps_converted_payload() {
    let text = "123".to_string();

    assert_eq!(
        convert::<Option<String>>(&OptionalTypeKeyReader, &text),
        Ok(Some("123".to_string()))
    );
    assert_eq!(convert::<Option<i64>>(&OptionalTypeKeyReader, &text), Ok(Some(123)));
    assert_eq!(
        convert::<Option<Vec<i64>>>(&OptionalTypeKeyReader, &text),
        Ok(Some(vec![123]))
    );
}

#[test]
fn optional_reader_returns_existing_optional_unchanged() {
    let existing = Some("value".to_string());

    assert_eq!(
        convert::<Option<String>>(&OptionalTypeKeyReader, &existing),
        Ok(existing.clone())
    );
}

#[test]
fn optional_reader_maps_absent_to_none() {
    assert_eq!(convert::<Option<String>>(&OptionalTypeKeyReader, &Null), Ok(None));
    assert_eq!(
        convert::<Option<i64>>(&OptionalTypeKeyReader, &None::<String>),
        Ok(None)
    );
}

#[test]
fn optional_reader_maps_blank_text_to_none() {
    assert_eq!(
        convert::<Option<i64>>(&OptionalTypeKeyReader, &String::new()),
        Ok(None)
    );
    assert_eq!(
        convert::<Option<bool>>(&OptionalTypeKeyReader, &"  ".to_string()),
        Ok(None)
    );
    assert_eq!(
        convert::<Option<Vec<u8>>>(&OptionalTypeKeyReader, &Some(String::new())),
        Ok(None)
    );
    assert_eq!(
        convert::<Option<String>>(&OptionalTypeKeyReader, &String::new()),
        Ok(Some(String::new()))
    );
}

#[test]
fn optional_reader_converts_present_inner_value() {
    assert_eq!(
        convert::<Option<i64>>(&OptionalTypeKeyReader, &Some("8".to_string())),
        Ok(Some(8))
    );

    let err = convert::<Option<i64>>(&OptionalTypeKeyReader, &"eight".to_string())
        .expect_err("not a number");
    assert!(matches!(err, Error::MalformedLiteral { .. }));
}

#[test]
fn sequence_reader_is_shape_specific() {
    let lists = SequenceTypeKeyReader::new(TypeShape::List);

    assert_eq!(lists.shape(), TypeShape::List);
    assert!(lists.is_compatible(&Vec::<String>::descriptor()));
    assert!(!lists.is_compatible(&VecDeque::<String>::descriptor()));
    assert!(!lists.is_compatible(&BTreeSet::<String>::descriptor()));
    assert!(!lists.is_compatible(&TypeDescriptor::erased(
        TypeShape::List,
        RawType::of::<Vec<String>>()
    )));
}

#[test]
fn sequence_reader_converts_each_item_in_order() {
    let lists = SequenceTypeKeyReader::new(TypeShape::List);
    let raw = vec!["3".to_string(), "1".to_string(), "2".to_string()];

    assert_eq!(convert::<Vec<i64>>(&lists, &raw), Ok(vec![3, 1, 2]));
}

#[test]
fn sequence_reader_builds_sets_and_queues() {
    let sets = SequenceTypeKeyReader::new(TypeShape::Set);
    let queues = SequenceTypeKeyReader::new(TypeShape::Queue);

    assert_eq!(
        convert::<BTreeSet<String>>(&sets, &vec![3_u8, 1, 3]),
        Ok(BTreeSet::from(["1".to_string(), "3".to_string()]))
    );
    assert_eq!(
        convert::<VecDeque<char>>(&queues, &"x".to_string()),
        Ok(VecDeque::from(['x']))
    );
    assert_eq!(convert::<VecDeque<char>>(&queues, &Null), Ok(VecDeque::new()));
}

#[test]
fn sequence_reader_propagates_element_failures() {
    let lists = SequenceTypeKeyReader::new(TypeShape::List);
    let err = convert::<Vec<i64>>(&lists, &vec!["1".to_string(), "x".to_string()])
        .expect_err("second element");

    assert!(matches!(err, Error::MalformedLiteral { .. }));
}

#[test]
fn map_reader_converts_keys_and_values() {
    let raw = BTreeMap::from([(1_i32, "10".to_string()), (2, "20".to_string())]);

    assert_eq!(
        convert::<BTreeMap<String, i64>>(&MapTypeKeyReader, &raw),
        Ok(BTreeMap::from([("1".to_string(), 10), ("2".to_string(), 20)]))
    );
    assert_eq!(
        convert::<HashMap<i64, bool>>(&MapTypeKeyReader, &Null),
        Ok(HashMap::new())
    );
}

#[test]
fn map_reader_rejects_non_entry_payloads() {
    let err = convert::<BTreeMap<String, i64>>(&MapTypeKeyReader, &vec![1_i64])
        .expect_err("items are not entries");

    assert!(matches!(err, Error::NoSuchConverter { .. }));
}

#[test]
fn standard_key_readers_claim_disjoint_shapes() {
    let readers = standard_key_readers();
    let descriptors = [
        Option::<String>::descriptor(),
        Vec::<String>::descriptor(),
        BTreeSet::<String>::descriptor(),
        VecDeque::<String>::descriptor(),
        BTreeMap::<String, String>::descriptor(),
    ];

    assert_eq!(readers.len(), descriptors.len());
    for (reader, descriptor) in readers.iter().zip(&descriptors) {
        assert!(reader.is_compatible(descriptor), "{} rejects {descriptor}", reader.name());
        assert_eq!(
            readers.iter().filter(|r| r.is_compatible(descriptor)).count(),
            1
        );
    }
}
