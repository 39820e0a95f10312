use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Condition
///
/// Kind of predicate or connective applied to a column. Each variant has a
/// canonical field name (`_` + upper-case name) that names the synthetic
/// column a connective builds when it reifies itself.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    Equals,
    GreaterThan,
    GreaterEqualsThan,
    LesserThan,
    LesserEqualsThan,
    In,
    Like,
    Between,
    And,
    Or,
    Not,
    Subquery,
}

impl Condition {
    pub const ALL: [Self; 12] = [
        Self::Equals,
        Self::GreaterThan,
        Self::GreaterEqualsThan,
        Self::LesserThan,
        Self::LesserEqualsThan,
        Self::In,
        Self::Like,
        Self::Between,
        Self::And,
        Self::Or,
        Self::Not,
        Self::Subquery,
    ];

    #[must_use]
    pub const fn name_field(self) -> &'static str {
        match self {
            Self::Equals => "_EQUALS",
            Self::GreaterThan => "_GREATER_THAN",
            Self::GreaterEqualsThan => "_GREATER_EQUALS_THAN",
            Self::LesserThan => "_LESSER_THAN",
            Self::LesserEqualsThan => "_LESSER_EQUALS_THAN",
            Self::In => "_IN",
            Self::Like => "_LIKE",
            Self::Between => "_BETWEEN",
            Self::And => "_AND",
            Self::Or => "_OR",
            Self::Not => "_NOT",
            Self::Subquery => "_SUBQUERY",
        }
    }

    #[must_use]
    pub fn from_name_field(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|condition| condition.name_field() == name)
    }

    /// AND and OR: conditions whose column holds child nodes.
    #[must_use]
    pub const fn is_connective(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name_field().trim_start_matches('_'))
    }
}
