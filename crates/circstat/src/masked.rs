//! Masked arrays: numeric data paired with a per-element validity mask.
//!
//! A mask entry of `true` marks the element as invalid (missing data).
//! Invalid elements keep whatever number sits in the data buffer, but every
//! accessor reports them as `None` and reductions skip them.

use crate::ShapeError;

/// Axis of a 2D radar field.
///
/// Rows are rays and columns are range gates. Reducing along an axis removes
/// it from the output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Axis {
    /// Axis 0: reduce across rays, one output per range gate.
    #[default]
    #[display("rays")]
    Rays,
    /// Axis 1: reduce across range gates, one output per ray.
    #[display("gates")]
    Gates,
}

impl TryFrom<usize> for Axis {
    type Error = ShapeError;

    fn try_from(axis: usize) -> Result<Self, Self::Error> {
        match axis {
            0 => Ok(Self::Rays),
            1 => Ok(Self::Gates),
            _ => Err(ShapeError::Axis { axis }),
        }
    }
}

/// A row-major 2D field with a validity mask.
///
/// # Examples
///
/// ```
/// use circstat::masked::MaskedField;
///
/// let field = MaskedField::from_rows([[Some(1.0), None], [Some(3.0), Some(4.0)]]).unwrap();
/// assert_eq!(field.rows(), 2);
/// assert_eq!(field.cols(), 2);
/// assert_eq!(field.get(0, 1), None);
/// assert_eq!(field.get(1, 0), Some(3.0));
/// assert_eq!(field.count_valid(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedField {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
    mask: Vec<bool>,
}

impl MaskedField {
    /// Creates a field from row-major data and a mask of the same length.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if `data` or `mask` does not hold exactly
    /// `rows * cols` elements.
    pub fn new(
        rows: usize,
        cols: usize,
        data: Vec<f64>,
        mask: Vec<bool>,
    ) -> Result<Self, ShapeError> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(ShapeError::DataLength {
                rows,
                cols,
                expected,
                actual: data.len(),
            });
        }
        if mask.len() != expected {
            return Err(ShapeError::MaskLength {
                expected,
                actual: mask.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            data,
            mask,
        })
    }

    /// Creates a field with every element valid.
    pub fn from_data(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, ShapeError> {
        let mask = vec![false; data.len()];
        Self::new(rows, cols, data, mask)
    }

    /// Creates a field masking every non-finite element (NaN or infinity).
    ///
    /// # Examples
    ///
    /// ```
    /// use circstat::masked::MaskedField;
    ///
    /// let field = MaskedField::masked_invalid(1, 3, vec![1.0, f64::NAN, f64::INFINITY]).unwrap();
    /// assert_eq!(field.count_valid(), 1);
    /// ```
    pub fn masked_invalid(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, ShapeError> {
        let mask = data.iter().map(|value| !value.is_finite()).collect();
        Self::new(rows, cols, data, mask)
    }

    /// Creates a field from rows of optional values; `None` is masked.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Ragged`] if the rows differ in length.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[Option<f64>]>,
    {
        let mut num_rows = 0;
        let mut cols = None;
        let mut data = vec![];
        let mut mask = vec![];
        for (index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *cols.get_or_insert(row.len());
            if row.len() != expected {
                return Err(ShapeError::Ragged {
                    row: index,
                    expected,
                    actual: row.len(),
                });
            }
            for value in row {
                data.push(value.unwrap_or(f64::NAN));
                mask.push(value.is_none());
            }
            num_rows += 1;
        }
        Self::new(num_rows, cols.unwrap_or(0), data, mask)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} field",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Returns the value at `(row, col)`, or `None` if it is masked.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        let i = self.index(row, col);
        (!self.mask[i]).then_some(self.data[i])
    }

    #[must_use]
    pub fn is_masked(&self, row: usize, col: usize) -> bool {
        self.mask[self.index(row, col)]
    }

    /// Marks the element at `(row, col)` invalid.
    pub fn set_masked(&mut self, row: usize, col: usize) {
        let i = self.index(row, col);
        self.mask[i] = true;
    }

    /// Number of valid elements in the whole field.
    #[must_use]
    pub fn count_valid(&self) -> usize {
        self.mask.iter().filter(|masked| !**masked).count()
    }

    /// Number of outputs produced when reducing along `axis`.
    #[must_use]
    pub fn lane_count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Rays => self.cols,
            Axis::Gates => self.rows,
        }
    }

    /// Iterates over the elements reduced into output `index` along `axis`.
    ///
    /// For [`Axis::Rays`] this walks column `index` top to bottom; for
    /// [`Axis::Gates`] it walks row `index` left to right.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.lane_count(axis)`.
    pub fn lane(&self, axis: Axis, index: usize) -> impl Iterator<Item = Option<f64>> + '_ {
        let lanes = self.lane_count(axis);
        assert!(
            index < lanes,
            "lane {index} out of bounds along {axis} ({lanes} lanes)"
        );
        let (len, start, step) = match axis {
            Axis::Rays => (self.rows, index, self.cols),
            Axis::Gates => (self.cols, index * self.cols, 1),
        };
        (0..len).map(move |k| {
            let i = start + k * step;
            (!self.mask[i]).then_some(self.data[i])
        })
    }
}

/// A 1D series with a validity mask, produced by reducing a [`MaskedField`].
///
/// # Examples
///
/// ```
/// use circstat::masked::MaskedSeries;
///
/// let series = MaskedSeries::from_options([Some(1.0), None, Some(3.0)]);
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.get(1), None);
/// assert_eq!(series.valid_values().collect::<Vec<_>>(), [1.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedSeries {
    data: Vec<f64>,
    mask: Vec<bool>,
}

impl MaskedSeries {
    /// Creates a series from data and a mask of the same length.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::MaskLength`] if the lengths differ.
    pub fn new(data: Vec<f64>, mask: Vec<bool>) -> Result<Self, ShapeError> {
        if data.len() != mask.len() {
            return Err(ShapeError::MaskLength {
                expected: data.len(),
                actual: mask.len(),
            });
        }
        Ok(Self { data, mask })
    }

    /// Creates a series from optional values; `None` is masked.
    pub fn from_options<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let (data, mask) = values
            .into_iter()
            .map(|value| (value.unwrap_or(f64::NAN), value.is_none()))
            .unzip();
        Self { data, mask }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the value at `index`, or `None` if it is masked.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        (!self.mask[index]).then_some(self.data[index])
    }

    #[must_use]
    pub fn is_masked(&self, index: usize) -> bool {
        self.mask[index]
    }

    /// Marks the element at `index` invalid; the underlying value is kept.
    pub fn mask_where(&mut self, index: usize) {
        self.mask[index] = true;
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.data
            .iter()
            .zip(&self.mask)
            .map(|(&value, &masked)| (!masked).then_some(value))
    }

    /// Iterates over the valid values only.
    pub fn valid_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().flatten()
    }

    #[must_use]
    pub fn count_valid(&self) -> usize {
        self.mask.iter().filter(|masked| !**masked).count()
    }

    /// Raw data buffer, including the values behind masked entries.
    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    #[must_use]
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }
}
