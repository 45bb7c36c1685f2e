//! Sparse coefficient rows for folding boundaries into linear operators.

use indexmap::IndexMap;

/// A virtual point expressed as an affine combination of real points.
///
/// `virtual = offset + Σ weights[i] * data[.., i, ..]`, where the keys are
/// indices along the boundary axis and the transverse index is fixed by the
/// caller. Weights keep insertion order so assembled operators are
/// deterministic.
///
/// # Examples
///
/// ```
/// use gridbc_boundary::SparseRow;
///
/// // Linear extrapolation at the lower end: 2 * data[0] - data[1].
/// let row = SparseRow::constant(0.0).with_weight(0, 2.0).with_weight(1, -1.0);
/// let data = [3.0, 5.0];
/// let v = row.evaluate(|i| Ok::<_, ()>(data[i as usize])).unwrap();
/// assert_eq!(v, 1.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SparseRow {
    offset: f64,
    weights: IndexMap<isize, f64>,
}

impl SparseRow {
    /// A row with no data dependence.
    pub fn constant(offset: f64) -> Self {
        Self {
            offset,
            weights: IndexMap::new(),
        }
    }

    /// A row reproducing `data[index]` exactly.
    pub fn identity(index: isize) -> Self {
        Self::constant(0.0).with_weight(index, 1.0)
    }

    /// Builder form of [`add_weight`](Self::add_weight).
    pub fn with_weight(mut self, index: isize, weight: f64) -> Self {
        self.add_weight(index, weight);
        self
    }

    /// Add `weight` to the coefficient of `index`, accumulating if the
    /// index is already present.
    pub fn add_weight(&mut self, index: isize, weight: f64) {
        *self.weights.entry(index).or_insert(0.0) += weight;
    }

    /// Add `value` to the constant offset.
    pub fn add_offset(&mut self, value: f64) {
        self.offset += value;
    }

    /// Multiply the offset and every weight by `factor`.
    pub fn scaled(mut self, factor: f64) -> Self {
        self.offset *= factor;
        for w in self.weights.values_mut() {
            *w *= factor;
        }
        self
    }

    /// Constant part.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Coefficients keyed by index along the boundary axis.
    pub fn weights(&self) -> &IndexMap<isize, f64> {
        &self.weights
    }

    /// Coefficient for `index`, zero if absent.
    pub fn weight(&self, index: isize) -> f64 {
        self.weights.get(&index).copied().unwrap_or(0.0)
    }

    /// Evaluate the row, reading real points through `read`.
    pub fn evaluate<E>(&self, mut read: impl FnMut(isize) -> Result<f64, E>) -> Result<f64, E> {
        let mut acc = self.offset;
        for (&i, &w) in &self.weights {
            acc += w * read(i)?;
        }
        Ok(acc)
    }
}
