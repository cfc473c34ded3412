//! Predicate evaluation over a software list.
//!
//! Fields are read through a typed accessor table rather than by dynamic
//! lookup, so each comparison dispatches on the field's value type.

use chrono::NaiveDate;
use std::cmp::Ordering;

use super::software::SnapshotSoftware;
use crate::filter::{FilterError, Operator};

/// A field value read from a software entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
}

type Accessor = fn(&SnapshotSoftware) -> FieldValue<'_>;

fn software_name(software: &SnapshotSoftware) -> FieldValue<'_> {
    FieldValue::Text(&software.name)
}

fn software_version(software: &SnapshotSoftware) -> FieldValue<'_> {
    FieldValue::Text(&software.version)
}

/// Fields of a software entry the engine can read.
const SOFTWARE_ACCESSORS: &[(&str, Accessor)] = &[
    ("name", software_name),
    ("version", software_version),
];

pub fn accessor_for(field_name: &str) -> Option<Accessor> {
    SOFTWARE_ACCESSORS
        .iter()
        .find(|(name, _)| *name == field_name)
        .map(|(_, accessor)| *accessor)
}

/// Keeps the entries whose `field_name` satisfies `operator` against `value`.
pub fn apply_filter_on(
    softwares: &[SnapshotSoftware],
    value: &str,
    operator: Operator,
    field_name: &str,
) -> Result<Vec<SnapshotSoftware>, FilterError> {
    let accessor = accessor_for(field_name)
        .ok_or_else(|| FilterError::NotImplemented("Unknown operation type!".to_string()))?;

    let mut kept = Vec::with_capacity(softwares.len());
    for software in softwares {
        if matches(accessor(software), operator, value)? {
            kept.push(software.clone());
        }
    }
    Ok(kept)
}

/// Evaluates one comparison. Text ordering is lexicographic.
pub fn matches(field: FieldValue<'_>, operator: Operator, operand: &str) -> Result<bool, FilterError> {
    match field {
        FieldValue::Text(text) => Ok(match operator {
            Operator::Includes => text.contains(operand),
            Operator::StartsWith => text.starts_with(operand),
            Operator::EndsWith => text.ends_with(operand),
            ordering => compare(text.cmp(operand), ordering),
        }),
        FieldValue::Number(number) => {
            let operand: f64 = operand.trim().parse().map_err(|_| {
                FilterError::Validation(format!("The value {operand} is not a number."))
            })?;
            ordered(number.partial_cmp(&operand), operator)
        }
        FieldValue::Date(date) => {
            let operand = NaiveDate::parse_from_str(operand.trim(), "%Y-%m-%d").map_err(|_| {
                FilterError::Validation(format!("The value {operand} is not a YYYY-MM-DD date."))
            })?;
            ordered(Some(date.cmp(&operand)), operator)
        }
    }
}

fn ordered(ordering: Option<Ordering>, operator: Operator) -> Result<bool, FilterError> {
    if operator.is_text_only() {
        return Err(FilterError::Validation(format!(
            "The comparison {operator} only applies to text fields."
        )));
    }
    // NaN never satisfies a comparison
    Ok(ordering.is_some_and(|ordering| compare(ordering, operator)))
}

fn compare(ordering: Ordering, operator: Operator) -> bool {
    match operator {
        Operator::Lt => ordering == Ordering::Less,
        Operator::Le => ordering != Ordering::Greater,
        Operator::Gt => ordering == Ordering::Greater,
        Operator::Ge => ordering != Ordering::Less,
        Operator::Ne => ordering != Ordering::Equal,
        Operator::Eq => ordering == Ordering::Equal,
        Operator::Includes | Operator::StartsWith | Operator::EndsWith => false,
    }
}
