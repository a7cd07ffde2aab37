/// Structural mismatch between the arrays handed to a function.
///
/// Numeric problems (empty input, degenerate distributions) are never
/// reported here; they surface as NaN or infinity in the result.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ShapeError {
    #[display("field data has {actual} elements, expected {expected} ({rows}x{cols})")]
    DataLength {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },
    #[display("mask has {actual} elements, expected {expected}")]
    MaskLength { expected: usize, actual: usize },
    #[display("row {row} has {actual} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[display("cannot broadcast arrays of length {left} and {right}")]
    Broadcast { left: usize, right: usize },
    #[display("axis {axis} is out of range for a 2D field")]
    Axis { axis: usize },
}
