//! Validation failures raised while mapping a document onto records.

use crate::FieldPath;
use serde_json::Value;
use std::fmt;

/// Primitive kind of a JSON node, as far as the mapper cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> JsonKind {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(n) if n.is_i64() => JsonKind::Integer,
            Value::Number(_) => JsonKind::Float,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    fn name(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Integer => "integer",
            JsonKind::Float => "float",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// A required field is absent.
    Missing,
    /// The field is present but holds the wrong kind of value.
    WrongKind { expected: JsonKind, found: JsonKind },
}

/// A single validation failure, tagged with where in the document it happened.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{path}: {problem}")]
pub struct ValidationError {
    path: FieldPath,
    problem: Problem,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Problem::Missing => write!(f, "missing required field"),
            Problem::WrongKind { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
        }
    }
}

impl ValidationError {
    pub fn missing(path: FieldPath) -> ValidationError {
        ValidationError {
            path,
            problem: Problem::Missing,
        }
    }

    pub fn wrong_kind(path: FieldPath, expected: JsonKind, found: &Value) -> ValidationError {
        ValidationError {
            path,
            problem: Problem::WrongKind {
                expected,
                found: JsonKind::of(found),
            },
        }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }
}

/// One or more validation failures, in the order they were found.
///
/// Never empty: the first failure is stored apart from the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    first: ValidationError,
    rest: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new(first: ValidationError, rest: Vec<ValidationError>) -> ValidationErrors {
        ValidationErrors { first, rest }
    }

    pub fn first(&self) -> &ValidationError {
        &self.first
    }

    pub fn into_first(self) -> ValidationError {
        self.first
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(err: ValidationError) -> Self {
        ValidationErrors::new(err, Vec::new())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for err in &self.rest {
            write!(f, "; {}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
