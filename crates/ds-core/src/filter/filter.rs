use serde::{Deserialize, Serialize};

use super::error::FilterError;
use super::model::{validate_field_operator, ElementType, Operator};

/// A user-defined predicate restricting the displayed elements.
///
/// `id` mirrors the filter's position inside its [`FilterManager`](super::FilterManager)
/// and is rewritten on every removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub element_type: ElementType,
    pub field_name: String,
    pub op_type: Operator,
    pub value: String,
    pub id: usize,
}

impl Filter {
    /// Builds a filter after checking the field belongs to `element_type`
    /// and accepts `op_type`. The id is assigned by the manager.
    pub fn new(
        element_type: ElementType,
        field_name: impl Into<String>,
        op_type: Operator,
        value: impl Into<String>,
    ) -> Result<Self, FilterError> {
        let field_name = field_name.into();
        validate_field_operator(element_type, &field_name, op_type)?;
        Ok(Self {
            element_type,
            field_name,
            op_type,
            value: value.into(),
            id: 0,
        })
    }

    /// Equality on (element type, field name, operator, value); the id is ignored.
    pub fn same_predicate(&self, other: &Filter) -> bool {
        self.element_type == other.element_type
            && self.field_name == other.field_name
            && self.op_type == other.op_type
            && self.value == other.value
    }
}
