// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter triples for list requests.
//!
//! The backend expects filters as JSON arrays: `[field, operator, value]`
//! for plain filters, or `[child_doctype, field, operator, value]` when
//! filtering through a child table (e.g. Dynamic Link). Filters serialize
//! verbatim into the `filters` query parameter; an empty filter list means
//! no restriction.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Comparison operator understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ne,
    Gt,
    Lt,
    Gte,
    Lte,
    Like,
    NotLike,
    In,
}

impl FilterOp {
    /// Returns the operator string sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Eq => "=",
            FilterOp::Ne => "!=",
            FilterOp::Gt => ">",
            FilterOp::Lt => "<",
            FilterOp::Gte => ">=",
            FilterOp::Lte => "<=",
            FilterOp::Like => "like",
            FilterOp::NotLike => "not like",
            FilterOp::In => "in",
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "=" | "==" => Ok(FilterOp::Eq),
            "!=" => Ok(FilterOp::Ne),
            ">" => Ok(FilterOp::Gt),
            "<" => Ok(FilterOp::Lt),
            ">=" => Ok(FilterOp::Gte),
            "<=" => Ok(FilterOp::Lte),
            "~" | "like" => Ok(FilterOp::Like),
            "!~" | "not like" => Ok(FilterOp::NotLike),
            "in" => Ok(FilterOp::In),
            _ => Err(Error::InvalidOperator(s.to_string())),
        }
    }
}

/// A single filter restricting a list request.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Child doctype for child-table filters (e.g. "Dynamic Link").
    pub child_doctype: Option<String>,
    pub field: String,
    pub op: FilterOp,
    pub value: Value,
}

impl Filter {
    /// Creates a plain filter triple.
    pub fn new(field: impl Into<String>, op: FilterOp, value: impl Into<Value>) -> Self {
        Filter {
            child_doctype: None,
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Creates an equality filter.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::new(field, FilterOp::Eq, value)
    }

    /// Creates a `like` filter.
    pub fn like(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::new(field, FilterOp::Like, value)
    }

    /// Creates a child-table filter, serialized as a 4-element array with
    /// the child doctype first.
    pub fn on_child(
        child_doctype: impl Into<String>,
        field: impl Into<String>,
        op: FilterOp,
        value: impl Into<Value>,
    ) -> Self {
        Filter {
            child_doctype: Some(child_doctype.into()),
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Parses a CLI filter expression.
    ///
    /// Supported forms: `field=value`, `field!=value`, `field>value`,
    /// `field<value`, `field>=value`, `field<=value`, `field~value`
    /// (like), `field!~value` (not like). Numeric and boolean values are
    /// coerced; everything else stays a string.
    pub fn parse(expr: &str) -> Result<Self> {
        const TOKENS: [&str; 8] = ["!=", ">=", "<=", "!~", "=", ">", "<", "~"];

        // The leftmost operator splits the expression; at the same
        // position the longer token wins, so ">=" is never read as ">".
        let mut split: Option<(usize, &str)> = None;
        for token in TOKENS {
            if let Some(pos) = expr.find(token) {
                let better = match split {
                    None => true,
                    Some((best_pos, best_token)) => {
                        pos < best_pos || (pos == best_pos && token.len() > best_token.len())
                    }
                };
                if better {
                    split = Some((pos, token));
                }
            }
        }

        let (pos, token) = split.ok_or_else(|| Error::InvalidFilter(expr.to_string()))?;
        let field = expr[..pos].trim();
        let raw = expr[pos + token.len()..].trim();
        if field.is_empty() || raw.is_empty() {
            return Err(Error::InvalidFilter(expr.to_string()));
        }
        Ok(Filter::new(field, token.parse::<FilterOp>()?, coerce(raw)))
    }
}

/// Coerces a raw CLI value: integer, float, bool, else string.
fn coerce(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return Value::from(f);
    }
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::from(raw),
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = if self.child_doctype.is_some() { 4 } else { 3 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        if let Some(child) = &self.child_doctype {
            seq.serialize_element(child)?;
        }
        seq.serialize_element(&self.field)?;
        seq.serialize_element(self.op.as_str())?;
        seq.serialize_element(&self.value)?;
        seq.end()
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
