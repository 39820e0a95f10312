use crate::{
    column::{Column, Condition},
    error::Error,
    payload::{Payload, RawView},
    registry::ConversionRegistry,
    value::Value,
};
use std::{
    iter,
    ops::{BitAnd, BitOr, Not},
    sync::Arc,
};

///
/// ConditionNode
///
/// Immutable (column, condition) pair; the building block of predicate
/// trees. Combinators always return new nodes.
///
/// AND / OR   → column value is the ordered `Vec<ConditionNode>` of children
/// NOT        → column value is the single negated node
/// SUBQUERY   → column value is the query payload, opaque here
///

#[derive(Clone, Debug, PartialEq)]
pub struct ConditionNode {
    column: Column,
    condition: Condition,
}

impl ConditionNode {
    ///
    /// CONSTRUCTION
    ///

    #[must_use]
    pub const fn of(column: Column, condition: Condition) -> Self {
        Self { column, condition }
    }

    /// `of` for callers holding a column that may be missing.
    pub fn try_of(column: Option<Column>, condition: Condition) -> Result<Self, Error> {
        let column = column.ok_or(Error::NullArgument { argument: "column" })?;

        Ok(Self::of(column, condition))
    }

    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub const fn eq(column: Column) -> Self {
        Self::of(column, Condition::Equals)
    }

    #[must_use]
    pub const fn gt(column: Column) -> Self {
        Self::of(column, Condition::GreaterThan)
    }

    #[must_use]
    pub const fn gte(column: Column) -> Self {
        Self::of(column, Condition::GreaterEqualsThan)
    }

    #[must_use]
    pub const fn lt(column: Column) -> Self {
        Self::of(column, Condition::LesserThan)
    }

    #[must_use]
    pub const fn lte(column: Column) -> Self {
        Self::of(column, Condition::LesserEqualsThan)
    }

    #[must_use]
    pub const fn like(column: Column) -> Self {
        Self::of(column, Condition::Like)
    }

    /// Membership test; the column value must be iterable.
    pub fn in_(column: Column) -> Result<Self, Error> {
        if !matches!(column.value().raw().view(), RawView::Items(_)) {
            return Err(Error::InvalidOperand {
                condition: Condition::In,
                reason: format!(
                    "expected an iterable value, found {}",
                    column.value().raw().type_name()
                ),
            });
        }

        Ok(Self::of(column, Condition::In))
    }

    /// Range test; the column value must hold exactly two bounds.
    pub fn between(column: Column) -> Result<Self, Error> {
        let bounds = match column.value().raw().view() {
            RawView::Items(items) => items.len(),
            _ => {
                return Err(Error::InvalidOperand {
                    condition: Condition::Between,
                    reason: format!(
                        "expected two bounds, found {}",
                        column.value().raw().type_name()
                    ),
                });
            }
        };
        if bounds != 2 {
            return Err(Error::InvalidOperand {
                condition: Condition::Between,
                reason: format!("expected two bounds, found {bounds}"),
            });
        }

        Ok(Self::of(column, Condition::Between))
    }

    /// AND over `nodes` in order. Nested AND nodes stay nested.
    pub fn and_all(nodes: impl IntoIterator<Item = Self>) -> Self {
        Self::connect(Condition::And, nodes.into_iter().collect(), None)
    }

    /// OR over `nodes` in order. Nested OR nodes stay nested.
    pub fn or_all(nodes: impl IntoIterator<Item = Self>) -> Self {
        Self::connect(Condition::Or, nodes.into_iter().collect(), None)
    }

    pub fn try_and_all(nodes: Option<Vec<Self>>) -> Result<Self, Error> {
        let nodes = nodes.ok_or(Error::NullArgument { argument: "nodes" })?;

        Ok(Self::and_all(nodes))
    }

    pub fn try_or_all(nodes: Option<Vec<Self>>) -> Result<Self, Error> {
        let nodes = nodes.ok_or(Error::NullArgument { argument: "nodes" })?;

        Ok(Self::or_all(nodes))
    }

    /// SUBQUERY node whose column value is `query` itself.
    pub fn subquery(query: impl Payload) -> Self {
        let column = Column::synthetic(Condition::Subquery.name_field(), Value::new(query));

        Self::of(column, Condition::Subquery)
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub const fn column(&self) -> &Column {
        &self.column
    }

    #[must_use]
    pub const fn condition(&self) -> Condition {
        self.condition
    }

    /// Children of an AND / OR node.
    #[must_use]
    pub fn children(&self) -> Option<&[Self]> {
        if !self.condition.is_connective() {
            return None;
        }

        self.column
            .value()
            .downcast_ref::<Vec<Self>>()
            .map(Vec::as_slice)
    }

    /// The node a NOT node negates.
    #[must_use]
    pub fn negated(&self) -> Option<&Self> {
        if self.condition != Condition::Not {
            return None;
        }

        self.column.value().downcast_ref::<Self>()
    }

    ///
    /// ALGEBRA
    ///

    /// Negation; negating a NOT node returns the node it wraps.
    #[must_use]
    pub fn negate(&self) -> Self {
        if let Some(inner) = self.negated() {
            return inner.clone();
        }

        let column = Column::synthetic(
            Condition::Not.name_field(),
            Value::with_registry(self.clone(), self.registry()),
        );

        Self::of(column, Condition::Not)
    }

    /// Conjunction; appends to an existing AND rather than nesting.
    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        self.combine(Condition::And, other)
    }

    /// Disjunction; appends to an existing OR rather than nesting.
    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        self.combine(Condition::Or, other)
    }

    fn combine(&self, connective: Condition, other: &Self) -> Self {
        let children = match self.children() {
            Some(existing) if self.condition == connective => existing
                .iter()
                .cloned()
                .chain(iter::once(other.clone()))
                .collect(),
            _ => vec![self.clone(), other.clone()],
        };

        Self::connect(connective, children, Some(self.registry()))
    }

    fn connect(
        connective: Condition,
        children: Vec<Self>,
        registry: Option<Arc<ConversionRegistry>>,
    ) -> Self {
        let registry = registry.unwrap_or_else(ConversionRegistry::global);
        let column = Column::synthetic(
            connective.name_field(),
            Value::with_registry(children, registry),
        );

        Self::of(column, connective)
    }

    // Synthetic columns read through the registry of the node they wrap.
    fn registry(&self) -> Arc<ConversionRegistry> {
        Arc::clone(self.column.value().registry())
    }
}

crate::impl_payload!(ConditionNode);

///
/// Operators
///

impl BitAnd for ConditionNode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(&rhs)
    }
}

impl BitAnd for &ConditionNode {
    type Output = ConditionNode;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for ConditionNode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(&rhs)
    }
}

impl BitOr for &ConditionNode {
    type Output = ConditionNode;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl Not for ConditionNode {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl Not for &ConditionNode {
    type Output = ConditionNode;

    fn not(self) -> Self::Output {
        self.negate()
    }
}
