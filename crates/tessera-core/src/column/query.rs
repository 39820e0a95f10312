use crate::column::ConditionNode;

///
/// ColumnQuery
///
/// Query descriptor over one collection of a column store. It travels as
/// the payload of SUBQUERY nodes; the condition algebra never looks inside.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnQuery {
    collection: String,
    columns: Vec<String>,
    condition: Option<ConditionNode>,
    skip: u64,
    limit: Option<u64>,
}

impl ColumnQuery {
    #[must_use]
    pub fn of(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            ..Self::default()
        }
    }

    /// Project onto `columns`; an empty projection selects every column.
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_condition(mut self, condition: ConditionNode) -> Self {
        self.condition = Some(condition);
        self
    }

    #[must_use]
    pub const fn with_skip(mut self, skip: u64) -> Self {
        self.skip = skip;
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub const fn condition(&self) -> Option<&ConditionNode> {
        self.condition.as_ref()
    }

    #[must_use]
    pub const fn skip(&self) -> u64 {
        self.skip
    }

    #[must_use]
    pub const fn limit(&self) -> Option<u64> {
        self.limit
    }
}

crate::impl_payload!(ColumnQuery);
