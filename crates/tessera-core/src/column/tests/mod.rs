mod columns;
mod property;

use crate::column::{Column, ConditionNode};

// ---- helpers -----------------------------------------------------------

pub(super) fn column(name: &str, value: impl Into<crate::value::Value>) -> Column {
    Column::of(name, value).expect("non-blank column name")
}

pub(super) fn name_eq() -> ConditionNode {
    ConditionNode::eq(column("name", "otavio"))
}

pub(super) fn age_gt() -> ConditionNode {
    ConditionNode::gt(column("age", 10_i32))
}

pub(super) fn salary_lte() -> ConditionNode {
    ConditionNode::lte(column("salary", 10_000.00_f64))
}
