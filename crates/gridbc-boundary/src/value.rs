//! Boundary-condition parameters.

use crate::data;
use gridbc_core::index;
use gridbc_core::BoundaryError;
use ndarray::{ArrayD, ArrayViewD, IxDyn};
use serde_json::Value;
use std::fmt;

/// The numeric parameter of a boundary rule.
///
/// Either one constant for the whole boundary face, or an array holding one
/// constant per transverse grid location. Array shapes must equal the grid
/// shape with the boundary axis removed.
#[derive(Clone, Debug, PartialEq)]
pub enum BcValue {
    /// The same value everywhere on the face.
    Scalar(f64),
    /// One value per transverse grid location.
    Array(ArrayD<f64>),
}

impl BcValue {
    /// Check that every entry is finite and that an array value matches the
    /// boundary face shape.
    pub fn validate(&self, transverse_shape: &[usize]) -> Result<(), BoundaryError> {
        let non_finite = match self {
            Self::Scalar(v) => Some(*v).filter(|v| !v.is_finite()),
            Self::Array(arr) => arr.iter().copied().find(|v| !v.is_finite()),
        };
        if let Some(v) = non_finite {
            return Err(BoundaryError::invalid(format!(
                "boundary value must be finite, got {v}"
            )));
        }
        match self {
            Self::Array(arr) if arr.shape() != transverse_shape => Err(BoundaryError::invalid(format!(
                "boundary value array has shape {:?}, expected {:?}",
                arr.shape(),
                transverse_shape
            ))),
            _ => Ok(()),
        }
    }

    /// The value applying at boundary-face location `transverse`.
    ///
    /// `axis` is the boundary axis and is only used to report which grid
    /// axis an out-of-range transverse component belongs to.
    pub fn at(&self, axis: usize, transverse: &[isize]) -> Result<f64, BoundaryError> {
        match self {
            Self::Scalar(v) => Ok(*v),
            Self::Array(arr) => {
                data::read_point(&arr.view(), transverse).map_err(|err| match err {
                    BoundaryError::DomainError { axis: t, index, size } => {
                        BoundaryError::DomainError {
                            axis: if t < axis { t } else { t + 1 },
                            index,
                            size,
                        }
                    }
                    other => other,
                })
            }
        }
    }

    /// `true` if every entry is exactly zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Scalar(v) => *v == 0.0,
            Self::Array(arr) => arr.iter().all(|&v| v == 0.0),
        }
    }

    /// Parse a number or a (nested) list of numbers.
    pub fn from_json(value: &Value) -> Result<Self, BoundaryError> {
        match value {
            Value::Number(n) => n.as_f64().map(Self::Scalar).ok_or_else(|| {
                BoundaryError::invalid(format!("boundary value {n} is not representable as f64"))
            }),
            Value::Array(_) => parse_nested(value).map(Self::Array),
            other => Err(BoundaryError::invalid(format!(
                "boundary value must be a number or a list of numbers, got {other}"
            ))),
        }
    }

    /// Serialize as a number or nested list.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Scalar(v) => Value::from(*v),
            Self::Array(arr) => nested_to_json(arr.view()),
        }
    }
}

impl From<f64> for BcValue {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<ArrayD<f64>> for BcValue {
    fn from(arr: ArrayD<f64>) -> Self {
        Self::Array(arr)
    }
}

impl fmt::Display for BcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(v) => write!(f, "{v}"),
            Self::Array(arr) => write!(f, "array{:?}", arr.shape()),
        }
    }
}

fn parse_nested(value: &Value) -> Result<ArrayD<f64>, BoundaryError> {
    let mut shape = Vec::new();
    let mut probe = value;
    while let Value::Array(items) = probe {
        shape.push(items.len());
        match items.first() {
            Some(first) => probe = first,
            None => break,
        }
    }
    let mut flat = Vec::with_capacity(shape.iter().product());
    flatten(value, &shape, 0, &mut flat)?;
    ArrayD::from_shape_vec(IxDyn(&shape), flat)
        .map_err(|e| BoundaryError::invalid(format!("boundary value array: {e}")))
}

fn flatten(
    value: &Value,
    shape: &[usize],
    depth: usize,
    flat: &mut Vec<f64>,
) -> Result<(), BoundaryError> {
    match value {
        Value::Array(items) if depth < shape.len() && items.len() == shape[depth] => {
            for item in items {
                flatten(item, shape, depth + 1, flat)?;
            }
            Ok(())
        }
        Value::Array(items) => Err(BoundaryError::invalid(format!(
            "boundary value array is ragged: found {} entries at depth {depth}, expected shape {shape:?}",
            items.len()
        ))),
        Value::Number(n) if depth == shape.len() => {
            let v = n.as_f64().ok_or_else(|| {
                BoundaryError::invalid(format!("boundary value {n} is not representable as f64"))
            })?;
            flat.push(v);
            Ok(())
        }
        other => Err(BoundaryError::invalid(format!(
            "boundary value array must contain numbers, got {other} at depth {depth}"
        ))),
    }
}

fn nested_to_json(arr: ArrayViewD<'_, f64>) -> Value {
    if arr.ndim() == 0 {
        return arr.iter().next().copied().map(Value::from).unwrap_or(Value::Null);
    }
    Value::Array(arr.outer_iter().map(nested_to_json).collect())
}

/// Check a transverse index against a face shape without reading values.
pub(crate) fn check_transverse(
    axis: usize,
    transverse: &[isize],
    shape: &[usize],
) -> Result<(), BoundaryError> {
    if index::to_position(transverse, shape).is_some() {
        return Ok(());
    }
    if transverse.len() != shape.len() {
        return Err(BoundaryError::invalid(format!(
            "boundary face index has {} entries, expected {}",
            transverse.len(),
            shape.len()
        )));
    }
    let (t, (&i, &n)) = transverse
        .iter()
        .zip(shape)
        .enumerate()
        .find(|(_, (&i, &n))| i < 0 || i as usize >= n)
        .ok_or_else(|| BoundaryError::invalid("boundary face index out of range"))?;
    Err(BoundaryError::DomainError {
        axis: if t < axis { t } else { t + 1 },
        index: i,
        size: n,
    })
}
