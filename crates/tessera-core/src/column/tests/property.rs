use crate::column::{Column, Condition, ConditionNode};
use proptest::prelude::*;

const FIELDS: [&str; 4] = ["name", "age", "salary", "city"];

const LEAF_CONDITIONS: [Condition; 6] = [
    Condition::Equals,
    Condition::GreaterThan,
    Condition::GreaterEqualsThan,
    Condition::LesserThan,
    Condition::LesserEqualsThan,
    Condition::Like,
];

fn arb_column() -> impl Strategy<Value = Column> {
    let field = prop::sample::select(FIELDS.to_vec());
    let value = prop_oneof![
        any::<i64>().prop_map(|v| v.to_string()),
        "[a-z]{1,8}",
    ];

    (field, value).prop_map(|(field, value)| Column::of(field, value).expect("non-blank name"))
}

fn arb_leaf() -> impl Strategy<Value = ConditionNode> {
    (arb_column(), prop::sample::select(LEAF_CONDITIONS.to_vec()))
        .prop_map(|(column, condition)| ConditionNode::of(column, condition))
}

fn arb_node() -> impl Strategy<Value = ConditionNode> {
    arb_leaf().prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.and(&b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.or(&b)),
            inner.prop_map(|node| node.negate()),
        ]
    })
}

proptest! {
    #[test]
    fn double_negation_is_identity(node in arb_node()) {
        prop_assert_eq!(node.negate().negate(), node);
    }

    #[test]
    fn self_conjunction_keeps_duplicates(node in arb_leaf()) {
        let and = node.and(&node);
        let expected = [node.clone(), node];

        prop_assert_eq!(and.children(), Some(expected.as_slice()));
    }

    #[test]
    fn chained_and_stays_flat(nodes in prop::collection::vec(arb_leaf(), 2..8)) {
        let chained = nodes[1..]
            .iter()
            .fold(nodes[0].clone(), |acc, node| acc.and(node));

        prop_assert_eq!(chained.condition(), Condition::And);
        prop_assert_eq!(chained.children(), Some(nodes.as_slice()));
    }

    #[test]
    fn chained_or_matches_n_ary_builder(nodes in prop::collection::vec(arb_leaf(), 2..8)) {
        let chained = nodes[1..]
            .iter()
            .fold(nodes[0].clone(), |acc, node| acc.or(node));

        prop_assert_eq!(chained, ConditionNode::or_all(nodes));
    }

    #[test]
    fn combinators_leave_operands_untouched(a in arb_node(), b in arb_node()) {
        let (a_before, b_before) = (a.clone(), b.clone());
        let _ = (a.and(&b), a.or(&b), a.negate());

        prop_assert_eq!(a, a_before);
        prop_assert_eq!(b, b_before);
    }
}
