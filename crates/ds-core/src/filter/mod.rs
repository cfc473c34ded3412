//! Filter domain: model, validation and the active-filter manager.

pub mod error;
pub mod filter;
pub mod manager;
pub mod model;

pub use error::FilterError;
pub use filter::Filter;
pub use manager::FilterManager;
pub use model::{
    fields_for, input_kind_for, validate_element_type, validate_field_operator,
    validate_operator, ElementType, FieldSpec, InputKind, Operator, NO_TYPE_PLACEHOLDER,
};
