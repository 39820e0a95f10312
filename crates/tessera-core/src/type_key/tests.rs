use crate::{
    column::ConditionNode,
    error::Error,
    type_key::{RawType, Reify, TypeDescriptor, TypeKey, TypeShape},
};
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

#[test]
fn reify_captures_full_parameterization() {
    let key = TypeKey::<Option<Vec<i64>>>::new();

    assert_eq!(key.shape(), TypeShape::Optional);
    assert_eq!(key.args().len(), 1);

    let element = key.element().expect("optional element");
    assert_eq!(element.shape(), TypeShape::List);
    assert_eq!(element.element().map(TypeDescriptor::raw), Some(RawType::of::<i64>()));
    assert!(!key.is_erased());
}

#[test]
fn shapes_follow_container_kind() {
    assert_eq!(Vec::<String>::descriptor().shape(), TypeShape::List);
    assert_eq!(VecDeque::<String>::descriptor().shape(), TypeShape::Queue);
    assert_eq!(BTreeSet::<String>::descriptor().shape(), TypeShape::Set);
    assert_eq!(HashSet::<String>::descriptor().shape(), TypeShape::Set);
    assert_eq!(BTreeMap::<i32, String>::descriptor().shape(), TypeShape::Map);
    assert_eq!(String::descriptor().shape(), TypeShape::Scalar);
    assert_eq!(ConditionNode::descriptor().shape(), TypeShape::Scalar);
}

#[test]
fn descriptors_compare_structurally() {
    assert_eq!(Vec::<i64>::descriptor(), Vec::<i64>::descriptor());
    assert_ne!(Vec::<i64>::descriptor(), Vec::<i32>::descriptor());
    assert_ne!(
        BTreeSet::<String>::descriptor(),
        HashSet::<String>::descriptor()
    );
}

#[test]
fn display_names_shape_and_arguments() {
    let descriptor = BTreeMap::<i32, Option<String>>::descriptor();

    assert_eq!(
        descriptor.to_string(),
        "Map<i32, Optional<alloc::string::String>>"
    );
    assert_eq!(
        TypeDescriptor::erased(TypeShape::List, RawType::of::<Vec<u8>>()).to_string(),
        "List<?>"
    );
}

#[test]
fn from_descriptor_rejects_erased_shapes() {
    let erased = TypeDescriptor::erased(TypeShape::List, RawType::of::<Vec<ConditionNode>>());
    let err = TypeKey::<Vec<ConditionNode>>::from_descriptor(erased).expect_err("erased");

    assert!(matches!(err, Error::IncompatibleType { .. }));
}

#[test]
fn from_descriptor_rejects_other_types() {
    let err = TypeKey::<Vec<String>>::from_descriptor(Vec::<i64>::descriptor())
        .expect_err("different element");

    assert!(matches!(err, Error::IncompatibleType { .. }));
}

#[test]
fn from_descriptor_accepts_matching_descriptor() {
    let key = TypeKey::<Option<String>>::from_descriptor(Option::<String>::descriptor())
        .expect("matching descriptor");

    assert_eq!(key.get(), &Option::<String>::descriptor());
    assert_eq!(format!("{key:?}"), "TypeKey { type: Optional<alloc::string::String> }");
}
