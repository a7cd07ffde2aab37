use anyhow::Context;
use circstat::masked::MaskedField;
use serde::{Deserialize, Serialize};

/// A masked 2D field as stored on disk.
///
/// Each inner array is one ray; `null` marks a missing gate.
///
/// ```json
/// { "rows": [[1.0, null, 3.0], [2.0, 2.5, null]] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldFile {
    pub rows: Vec<Vec<Option<f64>>>,
}

impl FieldFile {
    pub fn into_masked_field(self) -> anyhow::Result<MaskedField> {
        MaskedField::from_rows(&self.rows).context("Field rows must all have the same length")
    }
}
