//! Static knowledge of filterable element types, their fields and the
//! comparison operators each field accepts.
//!
//! Every validation rule of the filter form lives here so call sites never
//! re-implement the field/operator matrix.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use super::error::FilterError;

/// Placeholder shown by the filter form before a type is chosen.
pub const NO_TYPE_PLACEHOLDER: &str = "Please choose a type";

/// Category of element a filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    File,
    Library,
}

impl ElementType {
    pub const ALL: [ElementType; 2] = [ElementType::File, ElementType::Library];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::File => "File",
            ElementType::Library => "Library",
        }
    }

    /// Ordered field specs registered for this element type.
    pub fn field_specs(&self) -> &'static [FieldSpec] {
        match self {
            ElementType::File => FILE_FIELDS,
            ElementType::Library => LIBRARY_FIELDS,
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.field_specs().iter().find(|spec| spec.name == name)
    }
}

impl Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "File" => Ok(ElementType::File),
            "Library" => Ok(ElementType::Library),
            other => Err(FilterError::Validation(format!(
                "The input type {other} set is not valid. The only ones accepted are : \"File\" or \"Library\"."
            ))),
        }
    }
}

/// Comparison operator of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "includes")]
    Includes,
    #[serde(rename = "startswith")]
    StartsWith,
    #[serde(rename = "endswith")]
    EndsWith,
}

impl Operator {
    /// The global operator set, in display order.
    pub const ALL: [Operator; 9] = [
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
        Operator::Ne,
        Operator::Eq,
        Operator::Includes,
        Operator::StartsWith,
        Operator::EndsWith,
    ];

    /// Ordering and equality operators, accepted by every input kind.
    pub const ORDERING: [Operator; 6] = [
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
        Operator::Ne,
        Operator::Eq,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Ne => "!=",
            Operator::Eq => "==",
            Operator::Includes => "includes",
            Operator::StartsWith => "startswith",
            Operator::EndsWith => "endswith",
        }
    }

    pub fn is_text_only(&self) -> bool {
        matches!(
            self,
            Operator::Includes | Operator::StartsWith | Operator::EndsWith
        )
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| {
                let allowed = Operator::ALL
                    .iter()
                    .map(|op| format!("\"{op}\""))
                    .collect::<Vec<_>>()
                    .join(", ");
                FilterError::Validation(format!(
                    "The comparison {s} set is not valid. The only ones accepted are : {allowed}."
                ))
            })
    }
}

/// Comparison semantics of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Number,
    Date,
}

impl InputKind {
    pub fn operators(&self) -> &'static [Operator] {
        match self {
            InputKind::Text => &Operator::ALL,
            InputKind::Number | InputKind::Date => &Operator::ORDERING,
        }
    }

    pub fn accepts(&self, op: Operator) -> bool {
        self.operators().contains(&op)
    }
}

/// A filterable field and its input kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: InputKind,
}

const fn field(name: &'static str, kind: InputKind) -> FieldSpec {
    FieldSpec { name, kind }
}

const FILE_FIELDS: &[FieldSpec] = &[
    field("name", InputKind::Text),
    field("creationDate", InputKind::Date),
    field("lastUpdateDate", InputKind::Date),
    field("size", InputKind::Number),
    field("path", InputKind::Text),
    field("type", InputKind::Text),
];

const LIBRARY_FIELDS: &[FieldSpec] = &[
    field("name", InputKind::Text),
    field("firstUploadDate", InputKind::Date),
    field("lastUploadDate", InputKind::Date),
    field("size", InputKind::Number),
    field("repository", InputKind::Text),
    field("version", InputKind::Text),
];

/// Fails with `Validation` unless `value` is `"File"` or `"Library"`.
pub fn validate_element_type(value: &str) -> Result<ElementType, FilterError> {
    value.parse()
}

/// Fails with `Validation` unless `value` is in the global operator set.
pub fn validate_operator(value: &str) -> Result<Operator, FilterError> {
    value.parse()
}

/// Ordered field names for `element_type`.
///
/// Anything that is not a known element type (including the empty string)
/// yields the single placeholder entry.
pub fn fields_for(element_type: &str) -> Vec<&'static str> {
    match element_type.parse::<ElementType>() {
        Ok(kind) => kind.field_specs().iter().map(|spec| spec.name).collect(),
        Err(_) => vec![NO_TYPE_PLACEHOLDER],
    }
}

/// Input kind of `field_name` for `element_type`.
pub fn input_kind_for(element_type: &str, field_name: &str) -> Result<InputKind, FilterError> {
    let kind = element_type
        .parse::<ElementType>()
        .map_err(|_| FilterError::NotFound(format!("No input {element_type} found")))?;
    kind.field(field_name)
        .map(|spec| spec.kind)
        .ok_or_else(|| {
            FilterError::NotFound(format!(
                "No field {field_name} registered for the input {element_type}"
            ))
        })
}

/// Checks that `field_name` belongs to `element_type` and accepts `op`.
pub fn validate_field_operator(
    element_type: ElementType,
    field_name: &str,
    op: Operator,
) -> Result<InputKind, FilterError> {
    let spec = element_type.field(field_name).ok_or_else(|| {
        FilterError::Validation(format!(
            "The field {field_name} is not valid for the input type {element_type}."
        ))
    })?;
    if !spec.kind.accepts(op) {
        return Err(FilterError::Validation(format!(
            "The comparison {op} cannot be used on the field {field_name}."
        )));
    }
    Ok(spec.kind)
}
